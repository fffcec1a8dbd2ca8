use crate::id::CampusId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campus {
    pub id: CampusId,
    pub name: String,
}
