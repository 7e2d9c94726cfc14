use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Strong identifier for a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Staff member. Only active members take part in planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl StaffMember {
    pub fn new<I: AsRef<str>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: StaffId::new(id),
            name: name.into(),
            active: true,
        }
    }
}

/// Strong identifier for a shift slot (e.g. "morning", "late").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(String);

impl SlotId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A staff member's declared availability for one calendar day.
///
/// `Any` means "put me anywhere"; it is eligible in both fill passes,
/// whereas a day with no record at all is eligible in the fallback pass
/// only. `Slot` requests one specific slot and keeps the member out of the
/// fallback fill for every other slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
    Unavailable,
    Any,
    Slot(SlotId),
}

/// One submitted availability line: (staff, day, preference).
///
/// When several records exist for the same (staff, day), the last one in
/// the list wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub staff: StaffId,
    pub date: NaiveDate,
    pub preference: Preference,
}

impl PreferenceRecord {
    pub fn new(staff: StaffId, date: NaiveDate, preference: Preference) -> Self {
        Self {
            staff,
            date,
            preference,
        }
    }
}

/// One planned shift: a staff member working a slot on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub staff: StaffId,
    pub date: NaiveDate,
    pub slot: SlotId,
}

/// All assignments for a single day, in catalog order then pool order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRoster {
    pub date: NaiveDate,
    pub assignments: Vec<Assignment>,
}

impl DayRoster {
    pub fn contains_staff(&self, staff: &StaffId) -> bool {
        self.assignments.iter().any(|a| &a.staff == staff)
    }

    /// Number of assignments for a slot on this day.
    pub fn filled(&self, slot: &SlotId) -> usize {
        self.assignments.iter().filter(|a| &a.slot == slot).count()
    }
}

/// A full planning run: one `DayRoster` per date, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PeriodRoster {
    pub days: Vec<DayRoster>,
}

impl PeriodRoster {
    pub fn day(&self, date: NaiveDate) -> Option<&DayRoster> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn assignment_count(&self) -> usize {
        self.days.iter().map(|d| d.assignments.len()).sum()
    }
}

/// Working set persisted by the CLI: staff, submissions, last roster.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Planbook {
    pub staff: Vec<StaffMember>,
    pub preferences: Vec<PreferenceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<PeriodRoster>,
}

impl Planbook {
    pub fn find_staff<'a>(&'a self, id: &StaffId) -> Option<&'a StaffMember> {
        self.staff.iter().find(|m| &m.id == id)
    }
    pub fn find_staff_mut(&mut self, id: &StaffId) -> Option<&mut StaffMember> {
        self.staff.iter_mut().find(|m| &m.id == id)
    }
    pub fn find_staff_by_name<'a>(&'a self, name: &str) -> Option<&'a StaffMember> {
        self.staff.iter().find(|m| m.name == name)
    }
}
