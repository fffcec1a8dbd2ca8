use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use strum::EnumIter;
use thiserror::Error;

pub type ApprovalStatePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, EnumIter)]
pub enum ApprovalState {
    Pending                = 1,
    Approved               = 2,
    ReturnedToConstruction = 3,
}

impl ApprovalState {
    /// The state of every newly created location.
    pub const fn initial() -> Self {
        Self::Pending
    }

    /// Only these states can be requested explicitly, there
    /// is no way back to [`ApprovalState::Pending`].
    pub const fn is_transition_target(self) -> bool {
        matches!(self, Self::Approved | Self::ReturnedToConstruction)
    }
}

impl Default for ApprovalState {
    fn default() -> Self {
        Self::initial()
    }
}

#[derive(Debug, Error)]
#[error("Invalid approval state primitive: {0}")]
pub struct InvalidApprovalStatePrimitive(ApprovalStatePrimitive);

impl TryFrom<ApprovalStatePrimitive> for ApprovalState {
    type Error = InvalidApprovalStatePrimitive;
    fn try_from(from: ApprovalStatePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidApprovalStatePrimitive(from))
    }
}

impl From<ApprovalState> for ApprovalStatePrimitive {
    fn from(from: ApprovalState) -> Self {
        from as Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn convert_from_into_primitive() {
        for state in ApprovalState::iter() {
            let primitive = ApprovalStatePrimitive::from(state);
            assert_eq!(state, ApprovalState::try_from(primitive).unwrap());
        }
        assert!(ApprovalState::try_from(0).is_err());
        assert!(ApprovalState::try_from(4).is_err());
    }

    #[test]
    fn pending_is_not_a_transition_target() {
        assert!(!ApprovalState::Pending.is_transition_target());
        assert!(ApprovalState::Approved.is_transition_target());
        assert!(ApprovalState::ReturnedToConstruction.is_transition_target());
    }
}
