//! One-shot narrative schedule
//!
//! Scripted triggers keyed by hour of day. Each entry fires at most once
//! per session and is removed after dispatch.

/// Scripted narrative beats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeTrigger {
    /// The haunting starts; arms the vignette sampler
    CreepyEventsBegin,
    /// The clock locks until the ritual is complete
    TimeFreeze,
    /// The demon is loose
    DemonAppears,
    /// The night's final escalation
    HorrorPeak,
}

/// A one-shot trigger scheduled for a specific hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    /// Hour of day (0 - 23) the trigger fires at
    pub hour: u8,
    pub trigger: NarrativeTrigger,
}

/// Pending one-shot events, checked each clock tick
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pending: Vec<ScheduledEvent>,
}

impl Schedule {
    /// The standard night: the haunting at 12:00, the freeze at 15:00,
    /// the demon at 18:00, peak horror at 22:00.
    pub fn standard() -> Self {
        Self {
            pending: vec![
                ScheduledEvent {
                    hour: 12,
                    trigger: NarrativeTrigger::CreepyEventsBegin,
                },
                ScheduledEvent {
                    hour: 15,
                    trigger: NarrativeTrigger::TimeFreeze,
                },
                ScheduledEvent {
                    hour: 18,
                    trigger: NarrativeTrigger::DemonAppears,
                },
                ScheduledEvent {
                    hour: 22,
                    trigger: NarrativeTrigger::HorrorPeak,
                },
            ],
        }
    }

    /// Schedule with no pending events
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a one-shot entry
    pub fn push(&mut self, hour: u8, trigger: NarrativeTrigger) {
        self.pending.push(ScheduledEvent { hour, trigger });
    }

    /// Remove and return every entry due at `hour`.
    pub fn take_due(&mut self, hour: u8) -> Vec<NarrativeTrigger> {
        let mut due = Vec::new();
        self.pending.retain(|event| {
            if event.hour == hour {
                due.push(event.trigger);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn pending(&self) -> &[ScheduledEvent] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_schedule() {
        let schedule = Schedule::standard();
        assert_eq!(schedule.pending().len(), 4);
        assert_eq!(schedule.pending()[0].hour, 12);
    }

    #[test]
    fn test_take_due_removes_entry() {
        let mut schedule = Schedule::standard();
        let fired = schedule.take_due(18);
        assert_eq!(fired, vec![NarrativeTrigger::DemonAppears]);
        assert_eq!(schedule.pending().len(), 3);

        // A second pass through the same hour yields nothing
        assert!(schedule.take_due(18).is_empty());
    }

    #[test]
    fn test_no_entry_due() {
        let mut schedule = Schedule::standard();
        assert!(schedule.take_due(9).is_empty());
        assert_eq!(schedule.pending().len(), 4);
    }

    #[test]
    fn test_multiple_entries_same_hour() {
        let mut schedule = Schedule::empty();
        schedule.push(6, NarrativeTrigger::DemonAppears);
        schedule.push(6, NarrativeTrigger::HorrorPeak);
        let fired = schedule.take_due(6);
        assert_eq!(fired.len(), 2);
        assert!(schedule.is_empty());
    }
}
