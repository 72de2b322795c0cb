use crate::chain::{
    ApplyContext, ContractError,
    event::DisplayMultiplierChanged,
    multiplier::MultiplierState,
    scaled_ui_contract::{EnactScheduledScaledUiChange, ScheduleScaledUiChange, SetScaledUiData},
    utils::scaled_assert,
};

/// Replaces the active multiplier immediately.
pub fn set_scaled_ui_data(
    context: &mut ApplyContext,
    state: &mut MultiplierState,
    data: SetScaledUiData,
) -> Result<(), ContractError> {
    let multiplier = data.multiplier();
    multiplier.validate()?;

    state.active = multiplier;
    if !data.preserve_scheduled_change {
        state.pending = None;
    }
    context.emit(DisplayMultiplierChanged::new(multiplier, data.comment));
    Ok(())
}

/// Stores a future change, replacing any earlier one, or clears it when
/// no change is given.
pub fn schedule_scaled_ui_change(
    _context: &mut ApplyContext,
    state: &mut MultiplierState,
    data: ScheduleScaledUiChange,
) -> Result<(), ContractError> {
    if let Some(change) = &data.change {
        change.validate()?;
    }
    state.pending = data.change;
    Ok(())
}

pub fn enact_scheduled_scaled_ui_change(
    context: &mut ApplyContext,
    state: &mut MultiplierState,
    _data: EnactScheduledScaledUiChange,
) -> Result<(), ContractError> {
    let now = context.now();
    let pending = state
        .pending
        .as_ref()
        .ok_or(ContractError::NoScheduledChange)?;
    scaled_assert(
        pending.is_due(now),
        ContractError::NotYetDue {
            activation_time: pending.activation_time.as_u64(),
            now: now.as_u64(),
        },
    )?;

    let Some(change) = state.pending.take() else {
        return Err(ContractError::NoScheduledChange);
    };
    state.active = change.multiplier();
    context.emit(DisplayMultiplierChanged::new(
        change.multiplier(),
        change.comment,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use scaledui_serialization::VarUint;

    use super::*;
    use crate::chain::{
        address::Address,
        multiplier::{RationalMultiplier, ScheduledChange},
        time::TimePointSec,
    };

    fn context_at(now: u64) -> ApplyContext {
        ApplyContext::new(Address::default(), TimePointSec::new(now))
    }

    fn set(n: u64, d: u64, comment: Option<&str>, preserve: bool) -> SetScaledUiData {
        SetScaledUiData {
            numerator: VarUint::from(n),
            denominator: VarUint::from(d),
            comment: comment.map(str::to_string),
            preserve_scheduled_change: preserve,
        }
    }

    fn pending_state() -> MultiplierState {
        MultiplierState {
            active: RationalMultiplier::IDENTITY,
            pending: Some(ScheduledChange::new(
                100u64,
                RationalMultiplier::new(1u64, 2u64),
                Some("test".to_string()),
            )),
        }
    }

    #[test]
    fn test_set_emits_event() {
        let mut context = context_at(0);
        let mut state = MultiplierState::default();
        set_scaled_ui_data(&mut context, &mut state, set(3, 2, Some("test"), false)).unwrap();
        assert_eq!(state.active, RationalMultiplier::new(3u64, 2u64));
        assert_eq!(
            context.events(),
            &[DisplayMultiplierChanged::new(
                RationalMultiplier::new(3u64, 2u64),
                Some("test".to_string())
            )]
        );
    }

    #[test]
    fn test_set_zero_leaves_state_untouched() {
        for (n, d) in [(0, 1), (1, 0), (0, 0)] {
            let mut context = context_at(0);
            let mut state = pending_state();
            let before = state.clone();
            assert_eq!(
                set_scaled_ui_data(&mut context, &mut state, set(n, d, None, false)),
                Err(ContractError::ZeroMultiplier)
            );
            assert_eq!(state, before);
            assert!(context.events().is_empty());
        }
    }

    #[test]
    fn test_set_preserve_flag() {
        let mut context = context_at(0);
        let mut state = pending_state();
        set_scaled_ui_data(&mut context, &mut state, set(5, 4, None, true)).unwrap();
        assert_eq!(state.active, RationalMultiplier::new(5u64, 4u64));
        assert_eq!(state.pending, pending_state().pending);

        set_scaled_ui_data(&mut context, &mut state, set(5, 4, None, false)).unwrap();
        assert_eq!(state.pending, None);
        // an unchanged value still announces itself
        assert_eq!(context.events().len(), 2);
    }

    #[test]
    fn test_schedule_and_deschedule() {
        let mut context = context_at(0);
        let mut state = MultiplierState::default();
        let change = ScheduledChange::new(100u64, RationalMultiplier::new(1u64, 2u64), None);
        schedule_scaled_ui_change(
            &mut context,
            &mut state,
            ScheduleScaledUiChange {
                change: Some(change.clone()),
            },
        )
        .unwrap();
        assert_eq!(state.pending, Some(change));
        assert_eq!(state.active, RationalMultiplier::IDENTITY);

        schedule_scaled_ui_change(&mut context, &mut state, ScheduleScaledUiChange { change: None })
            .unwrap();
        assert_eq!(state.pending, None);
        assert!(context.events().is_empty());
    }

    #[test]
    fn test_schedule_zero_rejected() {
        let mut context = context_at(0);
        let mut state = pending_state();
        let before = state.clone();
        let change = ScheduledChange::new(200u64, RationalMultiplier::new(1u64, 0u64), None);
        assert_eq!(
            schedule_scaled_ui_change(
                &mut context,
                &mut state,
                ScheduleScaledUiChange {
                    change: Some(change)
                },
            ),
            Err(ContractError::ZeroMultiplier)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_enact_gating() {
        let mut state = pending_state();

        let mut early = context_at(99);
        assert_eq!(
            enact_scheduled_scaled_ui_change(&mut early, &mut state, EnactScheduledScaledUiChange),
            Err(ContractError::NotYetDue {
                activation_time: 100,
                now: 99
            })
        );
        assert_eq!(state, pending_state());
        assert!(early.events().is_empty());

        let mut due = context_at(100);
        enact_scheduled_scaled_ui_change(&mut due, &mut state, EnactScheduledScaledUiChange)
            .unwrap();
        assert_eq!(state.active, RationalMultiplier::new(1u64, 2u64));
        assert_eq!(state.pending, None);
        assert_eq!(
            due.events(),
            &[DisplayMultiplierChanged::new(
                RationalMultiplier::new(1u64, 2u64),
                Some("test".to_string())
            )]
        );
    }

    #[test]
    fn test_enact_without_pending() {
        let mut context = context_at(1_000);
        let mut state = MultiplierState::default();
        assert_eq!(
            enact_scheduled_scaled_ui_change(&mut context, &mut state, EnactScheduledScaledUiChange),
            Err(ContractError::NoScheduledChange)
        );
    }
}
