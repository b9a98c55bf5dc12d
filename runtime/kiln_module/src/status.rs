//! Linkage and evaluation status of a module record.

use std::fmt;

/// Status of a module record.
///
/// Progresses one step at a time along
/// `Unlinked → Linking → Linked → Evaluating → Evaluated`, or drops into
/// `Errored` from any non-terminal status. `Evaluated` and `Errored` are
/// terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModuleStatus {
    Unlinked,
    Linking,
    Linked,
    Evaluating,
    Evaluated,
    Errored,
}

impl ModuleStatus {
    /// Returns `true` for `Evaluated` and `Errored`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ModuleStatus::Evaluated | ModuleStatus::Errored)
    }

    /// Whether bindings exist and can be resolved.
    #[inline]
    pub fn is_linked(self) -> bool {
        matches!(
            self,
            ModuleStatus::Linked | ModuleStatus::Evaluating | ModuleStatus::Evaluated
        )
    }

    /// The status that follows this one on success, if any.
    pub fn successor(self) -> Option<ModuleStatus> {
        match self {
            ModuleStatus::Unlinked => Some(ModuleStatus::Linking),
            ModuleStatus::Linking => Some(ModuleStatus::Linked),
            ModuleStatus::Linked => Some(ModuleStatus::Evaluating),
            ModuleStatus::Evaluating => Some(ModuleStatus::Evaluated),
            ModuleStatus::Evaluated | ModuleStatus::Errored => None,
        }
    }

    /// Whether `self → next` is a legal transition.
    pub fn can_advance_to(self, next: ModuleStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == ModuleStatus::Errored || self.successor() == Some(next)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleStatus::Unlinked => "unlinked",
            ModuleStatus::Linking => "linking",
            ModuleStatus::Linked => "linked",
            ModuleStatus::Evaluating => "evaluating",
            ModuleStatus::Evaluated => "evaluated",
            ModuleStatus::Errored => "errored",
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
