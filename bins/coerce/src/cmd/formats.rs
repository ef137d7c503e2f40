use dataschemes::Profiles;

use crate::error::CoerceError;

pub fn run(profiles: &Profiles) -> Result<(), CoerceError> {
    for profile in profiles.iter() {
        println!("{:<8} {}", profile.name, profile.types);
    }
    Ok(())
}
