use scaledui_serialization::{BitSlice, Read};

use crate::chain::{
    ApplyContext, ContractError,
    address::Address,
    command::{Command, OpCode},
    multiplier::MultiplierState,
    scaled_ui_contract::{
        enact_scheduled_scaled_ui_change, schedule_scaled_ui_change, set_scaled_ui_data,
    },
};

/// Decodes one message body and applies it to `state`.
///
/// The header (`op`, `query_id`) is read first and the caller is checked
/// before the payload is decoded. Set and schedule require the admin.
/// Enactment is open to anyone while a change is pending; with nothing
/// pending, a non-admin caller is refused as not being the owner.
///
/// On error `state` is left as it was and no event is recorded.
pub fn dispatch(
    context: &mut ApplyContext,
    state: &mut MultiplierState,
    admin: &Address,
    body: &[u8],
) -> Result<OpCode, ContractError> {
    let slice = BitSlice::from_packed(body)?;
    let mut pos = 0;
    let op = OpCode::read_from(&slice, &mut pos)?;
    let query_id = u64::read(&slice, &mut pos)?;
    context.set_query_id(query_id);

    if op.is_admin_only() || state.pending.is_none() {
        context.require_caller(admin)?;
    }

    let command = Command::read_body(op, &slice, &mut pos)?;
    slice.end_parse(pos)?;

    match command {
        Command::SetScaledUiData(data) => set_scaled_ui_data(context, state, data)?,
        Command::ScheduleScaledUiChange(data) => schedule_scaled_ui_change(context, state, data)?,
        Command::EnactScheduledScaledUiChange(data) => {
            enact_scheduled_scaled_ui_change(context, state, data)?
        }
    }
    Ok(op)
}
