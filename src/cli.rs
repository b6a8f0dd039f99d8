use clap::Parser;

use crate::domain::Role;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(short, long, value_enum, help = "Initial reviewer role")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_and_role_parse() {
        let cli = Cli::parse_from(["rfptui"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert_eq!(cli.role, None);

        let cli = Cli::parse_from(["rfptui", "--role", "legal"]);
        assert_eq!(cli.role, Some(Role::Legal));
    }
}
