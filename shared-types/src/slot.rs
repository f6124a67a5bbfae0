use serde::{Deserialize, Serialize};

/// Number of half-hour slots in the generated schedule (8:00 AM through 6:30 PM).
pub const FALLBACK_SLOT_COUNT: usize = 22;

const FIRST_HOUR: usize = 8;

/// One half-hour interval as served by `GET /api/time-slots/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub time_label: String,
    pub is_available: bool,
}

impl TimeSlot {
    pub fn new(time_label: impl Into<String>, is_available: bool) -> Self {
        Self {
            time_label: time_label.into(),
            is_available,
        }
    }

    /// CSS modifier used by the availability table.
    pub fn status_class(&self) -> &'static str {
        if self.is_available {
            "available"
        } else {
            "booked"
        }
    }
}

/// Chronologically ordered slots for a single day.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct SlotList(Vec<TimeSlot>);

impl SlotList {
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self(slots)
    }

    /// Deterministic all-available schedule used when the endpoint cannot be reached.
    pub fn fallback() -> Self {
        (0..FALLBACK_SLOT_COUNT)
            .map(|i| TimeSlot::new(half_hour_label(i), true))
            .collect()
    }

    pub fn normalized(self, normalization: Normalization) -> Self {
        match normalization {
            Normalization::Preserve => self,
            Normalization::ForceAvailable => self
                .0
                .into_iter()
                .map(|slot| TimeSlot {
                    is_available: true,
                    ..slot
                })
                .collect(),
        }
    }

    /// First `limit` slots, or all of them when no limit is set.
    pub fn limited(&self, limit: Option<usize>) -> &[TimeSlot] {
        match limit {
            Some(n) => &self.0[..n.min(self.0.len())],
            None => &self.0,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlot> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[TimeSlot] {
        &self.0
    }
}

impl From<Vec<TimeSlot>> for SlotList {
    fn from(slots: Vec<TimeSlot>) -> Self {
        Self(slots)
    }
}

impl FromIterator<TimeSlot> for SlotList {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SlotList {
    type Item = TimeSlot;
    type IntoIter = std::vec::IntoIter<TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SlotList {
    type Item = &'a TimeSlot;
    type IntoIter = std::slice::Iter<'a, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How fetched availability flags are treated before display.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Every slot is shown as available regardless of what the endpoint says.
    #[default]
    ForceAvailable,
    Preserve,
}

fn half_hour_label(index: usize) -> String {
    let hour = index / 2 + FIRST_HOUR;
    let minute = (index % 2) * 30;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = if hour > 12 {
        hour - 12
    } else if hour == 0 {
        12
    } else {
        hour
    };

    format!("{}:{:02} {}", display_hour, minute, period)
}
