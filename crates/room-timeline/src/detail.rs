//! Booking detail extraction from the multi-line text of a booked token.
//!
//! The detail blob is a small line grammar: each line is `Label: value`, where
//! labels come from a fixed known set and values are free text. [`labeled_lines`]
//! tokenizes the blob into `(label, value)` pairs, and [`extract_details`]
//! projects the seven [`BookingField`]s out of them.
//!
//! Labels are matched exactly after trimming. The first occurrence of a label
//! wins and a missing label yields an empty string. Lines without a colon are
//! ignored.

use serde::{Deserialize, Serialize};

/// Structured metadata of one booking. Every field is independently optional
/// and is `""` when its label was not present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetail {
    pub reference: String,
    pub status: String,
    pub booker_name: String,
    pub booker_email: String,
    pub booker_org: String,
    pub purpose: String,
    pub use_type: String,
}

impl BookingDetail {
    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        BookingField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Reference => &self.reference,
            BookingField::Status => &self.status,
            BookingField::BookerName => &self.booker_name,
            BookingField::BookerEmail => &self.booker_email,
            BookingField::BookerOrg => &self.booker_org,
            BookingField::Purpose => &self.purpose,
            BookingField::UseType => &self.use_type,
        }
    }

    fn slot_mut(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Reference => &mut self.reference,
            BookingField::Status => &mut self.status,
            BookingField::BookerName => &mut self.booker_name,
            BookingField::BookerEmail => &mut self.booker_email,
            BookingField::BookerOrg => &mut self.booker_org,
            BookingField::Purpose => &mut self.purpose,
            BookingField::UseType => &mut self.use_type,
        }
    }
}

/// The fixed set of labels projected into a [`BookingDetail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Reference,
    Status,
    BookerName,
    BookerEmail,
    BookerOrg,
    Purpose,
    UseType,
}

impl BookingField {
    pub const ALL: [BookingField; 7] = [
        BookingField::Reference,
        BookingField::Status,
        BookingField::BookerName,
        BookingField::BookerEmail,
        BookingField::BookerOrg,
        BookingField::Purpose,
        BookingField::UseType,
    ];

    /// The label text as it appears in the scraped blob.
    pub fn label(self) -> &'static str {
        match self {
            BookingField::Reference => "Booking Reference Number",
            BookingField::Status => "Booking Status",
            BookingField::BookerName => "Booked for User Name",
            BookingField::BookerEmail => "Booked for User Email Address",
            BookingField::BookerOrg => "Booked for User Org Unit",
            BookingField::Purpose => "Purpose of Booking",
            BookingField::UseType => "Use Type",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// One `Label: value` line of a detail blob, both sides trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledLine<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

/// Tokenize a detail blob into labeled lines.
///
/// The split happens at the first `:` of each line, so values may contain
/// colons themselves (`Booking Time: 09:00-10:00` has the value `09:00-10:00`).
pub fn labeled_lines(blob: &str) -> impl Iterator<Item = LabeledLine<'_>> {
    blob.lines().filter_map(|line| {
        let (label, value) = line.split_once(':')?;
        Some(LabeledLine {
            label: label.trim(),
            value: value.trim(),
        })
    })
}

/// Extract the booking fields from a detail blob.
///
/// Returns `None` only for an empty blob. A non-empty blob always yields a
/// `BookingDetail`, with `""` for every label that was not found.
pub fn extract_details(details: &str) -> Option<BookingDetail> {
    if details.is_empty() {
        return None;
    }

    let mut detail = BookingDetail::default();
    let mut seen: Vec<BookingField> = Vec::with_capacity(BookingField::ALL.len());

    for line in labeled_lines(details) {
        let Some(field) = BookingField::from_label(line.label) else {
            continue;
        };
        if seen.contains(&field) {
            continue;
        }
        seen.push(field);
        *detail.slot_mut(field) = line.value.to_string();
    }

    Some(detail)
}
