// src/record.rs
//
// The unit of persistence: one registration.

use chrono::{DateTime, FixedOffset};

use crate::config::consts::{LEDGER_HEADERS, TIMESTAMP_FORMAT};

/// The four identity fields a profile page can yield. Any of them may be missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Identification,
    Email,
    Role,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Identification, Field::Email, Field::Role];

    /// Ledger column holding this field.
    pub fn column(self) -> &'static str {
        match self {
            Field::Name => LEDGER_HEADERS[0],
            Field::Identification => LEDGER_HEADERS[1],
            Field::Email => LEDGER_HEADERS[2],
            Field::Role => LEDGER_HEADERS[3],
        }
    }

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Identification => "ID",
            Field::Email => "email",
            Field::Role => "role",
        }
    }
}

/// Fields as read off a profile page, before stamping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub identification: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl ProfileFields {
    pub fn get(&self, f: Field) -> Option<&str> {
        match f {
            Field::Name => self.name.as_deref(),
            Field::Identification => self.identification.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Role => self.role.as_deref(),
        }
    }

    /// Fields that could not be located, in column order.
    pub fn gaps(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.get(*f).is_none()).collect()
    }
}

/// One registration. `registered_at` is always present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: Option<String>,
    pub identification: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub registered_at: DateTime<FixedOffset>,
}

impl ProfileRecord {
    pub fn stamp(fields: ProfileFields, registered_at: DateTime<FixedOffset>) -> Self {
        let ProfileFields { name, identification, email, role } = fields;
        Self { name, identification, email, role, registered_at }
    }

    pub fn get(&self, f: Field) -> Option<&str> {
        match f {
            Field::Name => self.name.as_deref(),
            Field::Identification => self.identification.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Role => self.role.as_deref(),
        }
    }

    /// `YYYY-MM-DD HH:MM:SS` in the record's own offset.
    pub fn timestamp(&self) -> String {
        self.registered_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// (column, cell) pairs in ledger order. Missing fields become empty cells.
    pub fn cells(&self) -> [(&'static str, String); 5] {
        let cell = |v: &Option<String>| v.clone().unwrap_or_default();
        [
            (LEDGER_HEADERS[0], cell(&self.name)),
            (LEDGER_HEADERS[1], cell(&self.identification)),
            (LEDGER_HEADERS[2], cell(&self.email)),
            (LEDGER_HEADERS[3], cell(&self.role)),
            (LEDGER_HEADERS[4], self.timestamp()),
        ]
    }

    /// What this record looks like once read back from the ledger.
    pub fn to_row(&self) -> LedgerRow {
        LedgerRow {
            name: self.name.clone(),
            identification: self.identification.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            registered_at: self.timestamp(),
        }
    }
}

/// A ledger row, typed. The timestamp stays textual: the file keeps no offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerRow {
    pub name: Option<String>,
    pub identification: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub registered_at: String,
}
