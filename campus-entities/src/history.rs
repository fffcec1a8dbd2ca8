use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use strum::EnumIter;
use thiserror::Error;

use crate::{activity::Activity, id::*};

pub type HistoryOperationPrimitive = i16;

/// The kind of mutation that has been recorded.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, EnumIter)]
pub enum HistoryOperation {
    Create               = 1,
    Update               = 2,
    Delete               = 3,
    Approve              = 4,
    ReturnToConstruction = 5,
}

#[derive(Debug, Error)]
#[error("Invalid history operation primitive: {0}")]
pub struct InvalidHistoryOperationPrimitive(HistoryOperationPrimitive);

impl TryFrom<HistoryOperationPrimitive> for HistoryOperation {
    type Error = InvalidHistoryOperationPrimitive;
    fn try_from(from: HistoryOperationPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidHistoryOperationPrimitive(from))
    }
}

impl From<HistoryOperation> for HistoryOperationPrimitive {
    fn from(from: HistoryOperation) -> Self {
        from as Self
    }
}

/// The kind of entity a history entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Place,
    Route,
}

/// Identifiers of entities with their own history.
pub trait HistorySubject: Copy + Eq + std::fmt::Debug {
    const KIND: SubjectKind;
}

impl HistorySubject for PlaceId {
    const KIND: SubjectKind = SubjectKind::Place;
}

impl HistorySubject for RouteId {
    const KIND: SubjectKind = SubjectKind::Route;
}

/// An entry that is about to be appended to the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry<S> {
    pub subject_id: S,
    pub activity: Activity,
    pub operation: HistoryOperation,
    pub message: String,
}

/// Immutable audit record of a single mutation.
///
/// The subject is only referenced by id and the entry
/// outlives the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry<S> {
    pub id: HistoryEntryId,
    pub subject_id: S,
    pub activity: Activity,
    pub operation: HistoryOperation,
    pub message: String,
}

/// A history entry together with the current names of
/// its subject and the subject's campus.
///
/// Both names are missing if the subject has been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord<S> {
    pub entry: HistoryEntry<S>,
    pub subject_name: Option<String>,
    pub campus_name: Option<String>,
}

pub type PlaceHistoryEntry = HistoryEntry<PlaceId>;
pub type RouteHistoryEntry = HistoryEntry<RouteId>;

pub type PlaceHistoryRecord = HistoryRecord<PlaceId>;
pub type RouteHistoryRecord = HistoryRecord<RouteId>;
