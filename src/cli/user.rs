//! Profile commands: login, logout, whoami
//!
//! Profiles are local names; signing in only selects whose data the other
//! commands read and write.

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::models::UserId;

pub fn handle_login(paths: &TrackerPaths, settings: &mut Settings, name: &str) -> TrackerResult<()> {
    let user = UserId::parse(name)?;
    paths.ensure_directories(Some(&user))?;

    settings.active_user = Some(user.clone());
    settings.save(paths)?;

    println!("Logged in as {}", user);
    Ok(())
}

pub fn handle_logout(paths: &TrackerPaths, settings: &mut Settings) -> TrackerResult<()> {
    match settings.active_user.take() {
        Some(user) => {
            settings.save(paths)?;
            println!("Logged out {}", user);
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

pub fn handle_whoami(settings: &Settings, explicit: Option<&str>) -> TrackerResult<()> {
    match explicit {
        Some(name) => println!("{}", UserId::parse(name)?),
        None => match &settings.active_user {
            Some(user) => println!("{}", user),
            None => println!("Not logged in."),
        },
    }
    Ok(())
}
