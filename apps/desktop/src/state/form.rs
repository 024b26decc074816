//! # Form State
//!
//! The four editable fields above the table. Text is kept exactly as typed;
//! only quantity is coerced, and only when a command needs it.

use inventory_core::validation::{coerce_fields, ValidationResult};
use inventory_core::{InventoryItem, ItemFields};

/// One of the editable fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Number,
    Category,
    Name,
    Quantity,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Number,
        FormField::Category,
        FormField::Name,
        FormField::Quantity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Number => "Number",
            FormField::Category => "Category",
            FormField::Name => "Name",
            FormField::Quantity => "Quantity",
        }
    }

    /// The field after this one, or `None` after Quantity.
    pub fn next(self) -> Option<FormField> {
        match self {
            FormField::Number => Some(FormField::Category),
            FormField::Category => Some(FormField::Name),
            FormField::Name => Some(FormField::Quantity),
            FormField::Quantity => None,
        }
    }
}

/// Text of the four fields, plus the id of the row they were loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    number: String,
    category: String,
    name: String,
    quantity: String,
    source: Option<i64>,
}

impl Default for FormState {
    /// Quantity starts at `0`, like an untouched integer entry.
    fn default() -> Self {
        FormState {
            number: String::new(),
            category: String::new(),
            name: String::new(),
            quantity: "0".to_string(),
            source: None,
        }
    }
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Number => &self.number,
            FormField::Category => &self.category,
            FormField::Name => &self.name,
            FormField::Quantity => &self.quantity,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Number => &mut self.number,
            FormField::Category => &mut self.category,
            FormField::Name => &mut self.name,
            FormField::Quantity => &mut self.quantity,
        }
    }

    pub fn set(&mut self, field: FormField, text: impl Into<String>) {
        *self.value_mut(field) = text.into();
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self, field: FormField) {
        self.value_mut(field).pop();
    }

    /// Id of the row the fields were last loaded from. Typing keeps it;
    /// `None` once the text no longer belongs to a displayed row.
    pub fn source(&self) -> Option<i64> {
        self.source
    }

    /// Overwrites every field with a row's current values.
    pub fn load(&mut self, item: &InventoryItem) {
        self.number = item.number.clone();
        self.category = item.category.clone();
        self.name = item.name.clone();
        self.quantity = item.quantity.to_string();
        self.source = Some(item.id);
    }

    /// Keeps the text but unbinds it from any row.
    pub fn detach(&mut self) {
        self.source = None;
    }

    /// Coerces the form into storable fields.
    pub fn to_fields(&self) -> ValidationResult<ItemFields> {
        coerce_fields(&self.number, &self.category, &self.name, &self.quantity)
    }
}
