use fork_common::{BlockNumber, Fork};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::schedule::ForkSchedule;

/// Plain copy of the evaluated flags of one block, indexed by [`Fork`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForkFlags([bool; Fork::COUNT]);

impl ForkFlags {
    /// Evaluates `schedule` directly, without building a scope.
    pub fn evaluate<S: ForkSchedule + ?Sized>(schedule: &S, block: BlockNumber) -> Self {
        let mut flags = [false; Fork::COUNT];
        for fork in Fork::iter() {
            flags[fork.index()] = schedule.is_fork_active(fork, block);
        }
        ForkFlags(flags)
    }

    pub(crate) fn set(&mut self, fork: Fork, active: bool) {
        self.0[fork.index()] = active;
    }

    pub fn get(&self, fork: Fork) -> bool {
        self.0[fork.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Fork, bool)> + '_ {
        Fork::iter().map(|fork| (fork, self.get(fork)))
    }

    pub fn active(&self) -> impl Iterator<Item = Fork> + '_ {
        self.iter().filter_map(|(fork, on)| on.then_some(fork))
    }
}
