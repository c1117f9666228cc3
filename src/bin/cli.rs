//! PJLink CLI Client
//!
//! Command-line interface for driving a projector.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use pjlink::protocol::vocab::{InputNumber, InputType, MuteState};
use pjlink::{Controller, Endpoint, Result, DEFAULT_PORT};

/// PJLink CLI
#[derive(Parser, Debug)]
#[command(name = "pjlink-cli")]
#[command(about = "CLI for PJLink projector control")]
#[command(version)]
struct Args {
    /// Projector hostname or IP address
    #[arg(short = 'H', long)]
    host: String,

    /// Projector TCP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Authentication token, if the device has one configured
    #[arg(long)]
    password: Option<String>,

    /// Round-trip timeout in seconds
    #[arg(short, long, default_value = "15")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn the projector on
    On,

    /// Turn the projector off
    Off,

    /// Query the power state
    Status,

    /// Select an input
    Input {
        /// Input source class
        #[arg(value_enum)]
        source: Source,

        /// Input number (1-9)
        number: u8,
    },

    /// Mute audio, video, or both
    Mute {
        #[arg(value_enum)]
        channel: Channel,
    },

    /// Unmute audio, video, or both
    Unmute {
        #[arg(value_enum)]
        channel: Channel,
    },

    /// Query the per-subsystem error severities
    Errors,

    /// Query device identity and lamp info
    Info,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Source {
    Rgb,
    Video,
    Digital,
    Storage,
    Network,
}

impl From<Source> for InputType {
    fn from(source: Source) -> Self {
        match source {
            Source::Rgb => InputType::Rgb,
            Source::Video => InputType::Video,
            Source::Digital => InputType::Digital,
            Source::Storage => InputType::Storage,
            Source::Network => InputType::Network,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Channel {
    Audio,
    Video,
    Both,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pjlink=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let mut builder = Endpoint::builder(&args.host)
        .port(args.port)
        .timeout(Duration::from_secs(args.timeout_secs));
    if let Some(password) = args.password.as_deref() {
        builder = builder.password(password);
    }
    let controller = Controller::new(builder.build());

    if let Err(e) = run(&controller, args.command) {
        tracing::error!("control action failed: {}", e);
        std::process::exit(1);
    }
}

fn run(controller: &Controller, command: Commands) -> Result<()> {
    match command {
        Commands::On => report_ack(controller.power_on()?),
        Commands::Off => report_ack(controller.power_off()?),
        Commands::Status => {
            println!("power: {:?}", controller.query_power()?);
            match controller.query_input()? {
                Some((source, number)) => println!("input: {:?} {}", source, number.get()),
                None => println!("input: unknown"),
            }
            match controller.query_mute()? {
                Some(mute) => println!(
                    "mute: audio={} video={}",
                    mute.audio_muted, mute.video_muted
                ),
                None => println!("mute: unknown"),
            }
        }
        Commands::Input { source, number } => {
            let Some(number) = InputNumber::new(number) else {
                eprintln!("input number must be 1-9");
                std::process::exit(2);
            };
            report_ack(controller.set_input(source.into(), number)?);
        }
        Commands::Mute { channel } => {
            let state = match channel {
                Channel::Audio => MuteState::AudioMuted,
                Channel::Video => MuteState::VideoMuted,
                Channel::Both => MuteState::AudioVideoMuted,
            };
            report_ack(controller.set_mute(state)?);
        }
        Commands::Unmute { channel } => {
            let state = match channel {
                Channel::Audio => MuteState::AudioUnmuted,
                Channel::Video => MuteState::VideoUnmuted,
                Channel::Both => MuteState::AudioVideoUnmuted,
            };
            report_ack(controller.set_mute(state)?);
        }
        Commands::Errors => match controller.query_error_status()? {
            Some(report) => {
                println!("fan:         {:?}", report.fan);
                println!("lamp:        {:?}", report.lamp);
                println!("temperature: {:?}", report.temperature);
                println!("cover:       {:?}", report.cover);
                println!("other:       {:?}", report.other);
            }
            None => println!("error status: unknown"),
        },
        Commands::Info => {
            println!("name:         {}", controller.query_name()?);
            println!("manufacturer: {}", controller.query_manufacturer()?);
            println!("product:      {}", controller.query_product_name()?);
            println!("info:         {}", controller.query_other_info()?);
            println!("class:        {}", controller.query_class()?);
            println!("lamp:         {}", controller.query_lamp()?);
        }
    }
    Ok(())
}

fn report_ack(accepted: bool) {
    if accepted {
        println!("OK");
    } else {
        println!("rejected by device");
    }
}
