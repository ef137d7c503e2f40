use dataschemes::{Profiles, Value, asprimitive};

use crate::config::PrimitiveArgs;
use crate::error::CoerceError;

pub fn run(args: &PrimitiveArgs, profiles: &Profiles) -> Result<(), CoerceError> {
    let primitive = convert(args, profiles)?;
    super::print(&primitive);
    Ok(())
}

fn convert(args: &PrimitiveArgs, profiles: &Profiles) -> Result<Value, CoerceError> {
    let types = args.constraint.resolve(profiles)?;
    let value = super::parse_value(args.kind, &args.value)?;
    tracing::debug!(kind = %args.kind, allowed = ?types, "asprimitive");
    Ok(asprimitive(&value, types.as_ref())?)
}
