use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        env = "FORECAST_ADDRESS",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub address: IpAddr,

    #[arg(short, long, env = "FORECAST_PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    pub key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    pub cert_file_path: Option<String>,

    /// Fixed seed for the temperature generator, os entropy when unset.
    #[arg(short, long, env = "FORECAST_SEED")]
    pub seed: Option<u64>,

    /// Reject requests asking for more days than this. Without a limit a
    /// single request can ask for forecasts up to the end of the calendar.
    #[arg(short, long, env = "FORECAST_MAX_DAYS")]
    pub max_days: Option<u32>,
}

pub struct TlsFiles {
    pub cert_file_path: String,
    pub key_file_path: String,
}

impl Args {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    pub fn tls_files(&self) -> Result<Option<TlsFiles>, ConfigError> {
        match (&self.key_file_path, &self.cert_file_path) {
            (Some(key_file_path), Some(cert_file_path)) => Ok(Some(TlsFiles {
                cert_file_path: cert_file_path.clone(),
                key_file_path: key_file_path.clone(),
            })),
            (Some(_), None) => Err(ConfigError::IncompleteTls {
                missing: "cert file",
            }),
            (None, Some(_)) => Err(ConfigError::IncompleteTls {
                missing: "key file",
            }),
            (None, None) => Ok(None),
        }
    }
}
