//! Clap derive structures for `check_unifi`.
//!
//! The short flags follow the classic plugin interface
//! (`-i -a -s -m -d -w -c`) so existing Icinga/Nagios command definitions
//! keep working.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// check_unifi -- UniFi device utilization check for Icinga, Nagios and friends
#[derive(Debug, Parser)]
#[command(
    name = "check_unifi",
    version,
    about = "Check UniFi device CPU or memory utilization via the Integration API",
    long_about = "Monitoring plugin for UniFi network devices.\n\n\
        Looks up a device by MAC address through the controller's Integration API,\n\
        reads its latest CPU or memory utilization and compares it against the\n\
        warning and critical levels.\n\n\
        Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.",
    after_help = "Example:\n  check_unifi -i 192.168.2.1 -a Ua7t6TuB9p1q8UgVaatm4aiwobasfh12o9 \
        -s MySite -m cpu -d 0c:ea:16:61:41:e9 -w 80 -c 90",
    arg_required_else_help = true
)]
pub struct Cli {
    /// UniFi controller address (IP, host:port, or URL)
    #[arg(short = 'i', long = "controller", value_name = "ADDR")]
    pub controller: String,

    /// UniFi Integration API key
    #[arg(short = 'a', long = "api-key", value_name = "KEY")]
    pub api_key: String,

    /// UniFi site name
    #[arg(short = 's', long = "site", value_name = "SITE", default_value = "Default")]
    pub site: String,

    /// Metric to check; available modes: cpu, memory
    #[arg(short = 'm', long = "mode", value_name = "MODE")]
    pub mode: String,

    /// Device MAC address, e.g. 00:11:22:33:44:55
    #[arg(short = 'd', long = "device", value_name = "MAC", value_parser = parse_mac)]
    pub device: String,

    /// Warning level in percent
    #[arg(
        short = 'w',
        long = "warn-level",
        value_name = "WARN",
        allow_negative_numbers = true
    )]
    pub warn_level: i64,

    /// Critical level in percent
    #[arg(
        short = 'c',
        long = "crit-level",
        value_name = "CRIT",
        allow_negative_numbers = true
    )]
    pub crit_level: i64,

    /// Per-request timeout in seconds
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Verify the controller's TLS certificate against the system roots
    /// (self-signed certificates are accepted by default)
    #[arg(long, conflicts_with = "ca_cert")]
    pub verify_tls: bool,

    /// Verify the controller's TLS certificate against this CA (PEM)
    #[arg(long, value_name = "PEM")]
    pub ca_cert: Option<PathBuf>,

    /// Append performance data to the status line
    #[arg(long)]
    pub perfdata: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Six colon-separated pairs of hex digits, kept as typed.
fn parse_mac(raw: &str) -> Result<String, String> {
    let mut octets = 0;
    for octet in raw.split(':') {
        if octet.len() != 2 || !octet.bytes().all(|b| b.is_ascii_hexdigit()) {
            octets = 0;
            break;
        }
        octets += 1;
    }

    if octets == 6 {
        Ok(raw.to_owned())
    } else {
        Err("expected six colon-separated hex octets, e.g. 00:11:22:33:44:55".into())
    }
}
