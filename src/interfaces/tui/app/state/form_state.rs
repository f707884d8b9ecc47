//! 表单状态管理
//!
//! 管理缩短链接表单的输入和验证

use std::collections::HashMap;

use crate::utils::{InputField, ShortenInput};

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditingField {
    #[default]
    Url,
    Ttl,
    Alias,
}

impl EditingField {
    /// 所有字段的顺序
    const ALL: [Self; 3] = [Self::Url, Self::Ttl, Self::Alias];

    /// 切换到下一个字段
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个字段
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Url => "Long URL",
            Self::Ttl => "TTL (minutes)",
            Self::Alias => "Custom Alias",
        }
    }
}

impl From<InputField> for EditingField {
    fn from(field: InputField) -> Self {
        match field {
            InputField::Url => Self::Url,
            InputField::Ttl => Self::Ttl,
            InputField::Alias => Self::Alias,
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 目标 URL 输入
    pub url: String,
    /// 过期分钟数输入
    pub ttl: String,
    /// 自定义别名输入
    pub alias: String,
    /// 验证错误
    pub validation_errors: HashMap<EditingField, String>,
    /// 当前编辑的字段
    pub currently_editing: Option<EditingField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空所有输入
    pub fn clear(&mut self) {
        self.url.clear();
        self.ttl.clear();
        self.alias.clear();
        self.validation_errors.clear();
        self.currently_editing = None;
    }

    /// Start editing from the URL field
    pub fn open(&mut self) {
        self.clear();
        self.currently_editing = Some(EditingField::Url);
    }

    /// 切换到下一个编辑字段
    pub fn toggle_field(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.next(),
            None => EditingField::default(),
        });
    }

    pub fn toggle_field_back(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.prev(),
            None => EditingField::default(),
        });
    }

    pub fn input(&self, field: EditingField) -> &str {
        match field {
            EditingField::Url => &self.url,
            EditingField::Ttl => &self.ttl,
            EditingField::Alias => &self.alias,
        }
    }

    /// 获取当前编辑字段的输入可变引用
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.currently_editing {
            Some(EditingField::Url) => Some(&mut self.url),
            Some(EditingField::Ttl) => Some(&mut self.ttl),
            Some(EditingField::Alias) => Some(&mut self.alias),
            None => None,
        }
    }

    /// 向当前编辑字段添加字符
    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut() {
            input.push(c);
        }
    }

    /// 从当前编辑字段删除最后一个字符
    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
        }
    }

    /// Snapshot of the raw inputs for validation
    pub fn to_input(&self) -> ShortenInput {
        ShortenInput {
            url: self.url.clone(),
            ttl: self.ttl.clone(),
            alias: self.alias.clone(),
        }
    }

    pub fn get_error(&self, field: EditingField) -> Option<&str> {
        self.validation_errors.get(&field).map(String::as_str)
    }

    pub fn set_error(&mut self, field: EditingField, error: String) {
        self.validation_errors.insert(field, error);
    }

    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}
