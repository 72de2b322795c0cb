use spdlog::{info, warn};

use crate::chain::{
    ApplyContext, ContractConfig, ContractError,
    address::Address,
    command::OpCode,
    config::{ADMIN_KEY, SCALED_UI_KEY},
    event::DisplayMultiplierChanged,
    multiplier::MultiplierState,
    scaled_ui_contract::dispatch,
    storage::KeyValueStore,
    time::TimePointSec,
};

/// Result of pushing one message, as reported back to the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOutcome {
    pub success: bool,
    /// Zero when the message was accepted.
    pub exit_code: u32,
    pub query_id: Option<u64>,
    /// Packed events, each starting with its op tag.
    pub events: Vec<Vec<u8>>,
}

impl MessageOutcome {
    fn accepted(query_id: Option<u64>, events: Vec<Vec<u8>>) -> Self {
        Self {
            success: true,
            exit_code: 0,
            query_id,
            events,
        }
    }

    fn rejected(error: &ContractError, query_id: Option<u64>) -> Self {
        Self {
            success: false,
            exit_code: error.exit_code(),
            query_id,
            events: Vec::new(),
        }
    }
}

/// One deployed scaled-UI contract instance on top of a key-value store.
pub struct Controller<S: KeyValueStore> {
    store: S,
    admin: Address,
}

impl<S: KeyValueStore> Controller<S> {
    /// Deploys a fresh instance into `store`.
    pub fn initialize(mut store: S, config: &ContractConfig) -> Result<Self, ContractError> {
        config.validate()?;
        let admin = *config.admin();
        let state = MultiplierState::new(*config.initial_multiplier());
        info!(
            "initializing scaled ui contract, admin: {}, multiplier: {}",
            admin, state.active
        );
        store.set_record(ADMIN_KEY, &admin)?;
        store.set_record(SCALED_UI_KEY, &state)?;
        Ok(Self { store, admin })
    }

    /// Re-opens a store written by `initialize`.
    pub fn load(store: S) -> Result<Self, ContractError> {
        let admin: Address = store.get_record(ADMIN_KEY)?;
        let state: MultiplierState = store.get_record(SCALED_UI_KEY)?;
        info!(
            "loaded scaled ui contract, admin: {}, multiplier: {}",
            admin, state.active
        );
        Ok(Self { store, admin })
    }

    pub fn push_message(
        &mut self,
        caller: &Address,
        body: &[u8],
        now: TimePointSec,
    ) -> MessageOutcome {
        let mut context = ApplyContext::new(*caller, now);
        match self.apply(&mut context, body) {
            Ok((op, events)) => {
                info!(
                    "accepted {} from {}, query id: {:?}",
                    op,
                    caller,
                    context.query_id()
                );
                MessageOutcome::accepted(context.query_id(), events)
            }
            Err(e) => {
                warn!(
                    "rejected message from {}, query id: {:?}, exit code: {}: {}",
                    caller,
                    context.query_id(),
                    e.exit_code(),
                    e
                );
                MessageOutcome::rejected(&e, context.query_id())
            }
        }
    }

    // State is written back only once the whole message has succeeded.
    fn apply(
        &mut self,
        context: &mut ApplyContext,
        body: &[u8],
    ) -> Result<(OpCode, Vec<Vec<u8>>), ContractError> {
        let mut state = self.get_state()?;
        let op = dispatch(context, &mut state, &self.admin, body)?;
        let events = context
            .take_events()
            .iter()
            .map(DisplayMultiplierChanged::to_bytes)
            .collect::<Result<Vec<_>, _>>()?;
        self.store.set_record(SCALED_UI_KEY, &state)?;
        Ok((op, events))
    }

    pub fn get_state(&self) -> Result<MultiplierState, ContractError> {
        self.store.get_record(SCALED_UI_KEY)
    }

    pub fn get_display_multiplier(&self) -> Result<(u128, u128), ContractError> {
        Ok(self.get_state()?.active.as_tuple())
    }

    /// `(activation_time, numerator, denominator, comment)` of the pending change.
    pub fn get_scheduled_change(
        &self,
    ) -> Result<Option<(u64, u128, u128, Option<String>)>, ContractError> {
        Ok(self.get_state()?.pending.map(|change| {
            (
                change.activation_time.as_u64(),
                change.numerator.as_u128(),
                change.denominator.as_u128(),
                change.comment,
            )
        }))
    }

    pub fn admin(&self) -> &Address {
        &self.admin
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use scaledui_error::{EXIT_CODE_NOT_OWNER, EXIT_CODE_ZERO_MULTIPLIER};
    use scaledui_serialization::Write;

    use super::*;
    use crate::chain::{
        command::Message,
        multiplier::RationalMultiplier,
        storage::{FileStore, MemoryStore},
    };

    const ADMIN: Address = Address::new(0, [0x11; 32]);
    const STRANGER: Address = Address::new(0, [0x22; 32]);

    fn deploy() -> Controller<MemoryStore> {
        let config = ContractConfig::new(ADMIN, RationalMultiplier::IDENTITY);
        Controller::initialize(MemoryStore::new(), &config).unwrap()
    }

    #[test]
    fn test_initial_getters() {
        let controller = deploy();
        assert_eq!(controller.get_display_multiplier().unwrap(), (1, 1));
        assert_eq!(controller.get_scheduled_change().unwrap(), None);
        assert_eq!(controller.admin(), &ADMIN);
    }

    #[test]
    fn test_accepted_message_persists_and_emits() {
        let mut controller = deploy();
        let body = Message::set_scaled_ui_data(
            42,
            RationalMultiplier::new(3u64, 2u64),
            Some("test".to_string()),
            false,
        )
        .pack()
        .unwrap();
        let outcome = controller.push_message(&ADMIN, &body, TimePointSec::new(0));
        assert!(outcome.success);
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.query_id, Some(42));
        assert_eq!(outcome.events.len(), 1);
        let event = DisplayMultiplierChanged::parse(&outcome.events[0]).unwrap();
        assert_eq!(event.comment.as_deref(), Some("test"));
        assert_eq!(controller.get_display_multiplier().unwrap(), (3, 2));
    }

    #[test]
    fn test_rejected_message_writes_nothing() {
        let mut controller = deploy();
        let before = controller.store().clone();

        let body = Message::set_scaled_ui_data(1, RationalMultiplier::new(3u64, 0u64), None, false)
            .pack()
            .unwrap();
        let outcome = controller.push_message(&ADMIN, &body, TimePointSec::new(0));
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, EXIT_CODE_ZERO_MULTIPLIER);
        assert!(outcome.events.is_empty());

        let body = Message::set_scaled_ui_data(2, RationalMultiplier::new(3u64, 2u64), None, false)
            .pack()
            .unwrap();
        let outcome = controller.push_message(&STRANGER, &body, TimePointSec::new(0));
        assert_eq!(outcome.exit_code, EXIT_CODE_NOT_OWNER);
        assert_eq!(outcome.query_id, Some(2));

        assert_eq!(controller.store(), &before);
    }

    #[test]
    fn test_initialize_rejects_zero_multiplier() {
        let config = ContractConfig::new(ADMIN, RationalMultiplier::new(0u64, 1u64));
        assert!(matches!(
            Controller::initialize(MemoryStore::new(), &config),
            Err(ContractError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_requires_initialized_store() {
        assert!(matches!(
            Controller::load(MemoryStore::new()),
            Err(ContractError::StorageError(_))
        ));
    }

    #[test]
    fn test_reload_from_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContractConfig::new(ADMIN, RationalMultiplier::new(5u64, 4u64));
        let mut controller =
            Controller::initialize(FileStore::open(dir.path()).unwrap(), &config).unwrap();
        let body = Message::schedule_scaled_ui_change(
            7,
            Some(crate::chain::multiplier::ScheduledChange::new(
                1_000u64,
                RationalMultiplier::new(1u64, 2u64),
                None,
            )),
        )
        .pack()
        .unwrap();
        assert!(
            controller
                .push_message(&ADMIN, &body, TimePointSec::new(0))
                .success
        );
        drop(controller);

        let controller = Controller::load(FileStore::open(dir.path()).unwrap()).unwrap();
        assert_eq!(controller.admin(), &ADMIN);
        assert_eq!(controller.get_display_multiplier().unwrap(), (5, 4));
        assert_eq!(
            controller.get_scheduled_change().unwrap(),
            Some((1_000, 1, 2, None))
        );
    }
}
