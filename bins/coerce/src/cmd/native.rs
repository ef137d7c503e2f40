use dataschemes::{Profiles, Value, asnative};

use crate::config::NativeArgs;
use crate::error::CoerceError;

pub fn run(args: &NativeArgs, profiles: &Profiles) -> Result<(), CoerceError> {
    let native = convert(args, profiles)?;
    super::print(&native);
    Ok(())
}

fn convert(args: &NativeArgs, profiles: &Profiles) -> Result<Value, CoerceError> {
    let types = args.constraint.resolve(profiles)?;
    let primitive = super::parse_value(args.kind, &args.value)?;
    tracing::debug!(target_kind = %args.target, kind = %args.kind, allowed = ?types, "asnative");
    Ok(asnative(args.target, &primitive, types.as_ref())?)
}
