mod execute;

use clap::Args;

/// Browse films by actor
#[derive(Args, Debug)]
#[command(after_help = "\
Pick an actor from the list, then pick one of their films to see its
details.")]
pub struct ActorCmd {}
