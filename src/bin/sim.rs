//! PJLink Projector Simulator
//!
//! A fake projector for exercising the client without hardware. Keeps
//! an in-memory device state and serves one command per connection,
//! exactly as the wire protocol expects.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pjlink::protocol::vocab::{
    CommandCode, ErrorToken, InputNumber, InputType, MuteState, PowerCommand, PowerStatus,
    Severity, ACK, QUERY,
};
use pjlink::protocol::{decode_command, encode_response, Command, Response};
use pjlink::transport::MAX_REPLY_LEN;

/// PJLink Simulator
#[derive(Parser, Debug)]
#[command(name = "pjlink-sim")]
#[command(about = "Fake PJLink projector for testing")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:4352")]
    listen: String,
}

/// In-memory projector state
struct Projector {
    power: PowerStatus,
    input_type: InputType,
    input_number: InputNumber,
    audio_muted: bool,
    video_muted: bool,
    lamp_hours: u32,
}

impl Projector {
    fn new() -> Self {
        Self {
            power: PowerStatus::Off,
            input_type: InputType::Rgb,
            input_number: InputNumber::default(),
            audio_muted: false,
            video_muted: false,
            lamp_hours: 500,
        }
    }

    /// Apply one command and produce the reply data
    fn execute(&mut self, command: &Command) -> String {
        let parameter = command.parameter.as_str();
        match command.code {
            CommandCode::Power => {
                if parameter == QUERY {
                    self.power.as_wire().to_string()
                } else if parameter == PowerCommand::On.as_wire() {
                    self.power = PowerStatus::On;
                    ACK.to_string()
                } else if parameter == PowerCommand::Off.as_wire() {
                    self.power = PowerStatus::Off;
                    ACK.to_string()
                } else {
                    ErrorToken::OutOfParameter.as_wire().to_string()
                }
            }
            CommandCode::Input => {
                if parameter == QUERY {
                    return format!(
                        "{}{}",
                        self.input_type.as_digit(),
                        self.input_number.as_digit()
                    );
                }
                let mut chars = parameter.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(t), Some(n), None) => {
                        match InputType::from_digit(t).zip(InputNumber::from_digit(n)) {
                            Some((input_type, input_number)) => {
                                self.input_type = input_type;
                                self.input_number = input_number;
                                ACK.to_string()
                            }
                            None => ErrorToken::OutOfParameter.as_wire().to_string(),
                        }
                    }
                    _ => ErrorToken::OutOfParameter.as_wire().to_string(),
                }
            }
            CommandCode::Mute => {
                if parameter == QUERY {
                    let state = match (self.audio_muted, self.video_muted) {
                        (true, true) => MuteState::AudioVideoMuted,
                        (true, false) => MuteState::AudioMuted,
                        (false, true) => MuteState::VideoMuted,
                        (false, false) => MuteState::AudioVideoUnmuted,
                    };
                    return state.as_wire().to_string();
                }
                let state = [
                    MuteState::VideoMuted,
                    MuteState::VideoUnmuted,
                    MuteState::AudioMuted,
                    MuteState::AudioUnmuted,
                    MuteState::AudioVideoMuted,
                    MuteState::AudioVideoUnmuted,
                ]
                .into_iter()
                .find(|s| s.as_wire() == parameter);
                match state {
                    Some(MuteState::VideoMuted) => self.video_muted = true,
                    Some(MuteState::VideoUnmuted) => self.video_muted = false,
                    Some(MuteState::AudioMuted) => self.audio_muted = true,
                    Some(MuteState::AudioUnmuted) => self.audio_muted = false,
                    Some(MuteState::AudioVideoMuted) => {
                        self.audio_muted = true;
                        self.video_muted = true;
                    }
                    Some(MuteState::AudioVideoUnmuted) => {
                        self.audio_muted = false;
                        self.video_muted = false;
                    }
                    None => return ErrorToken::OutOfParameter.as_wire().to_string(),
                }
                ACK.to_string()
            }
            CommandCode::ErrorStatus => Severity::Ok.as_digit().to_string().repeat(5),
            CommandCode::Lamp => {
                let lit = if self.power == PowerStatus::On { 1 } else { 0 };
                format!("{} {}", self.lamp_hours, lit)
            }
            CommandCode::Name => "Simulated Projector".to_string(),
            CommandCode::Manufacturer => "PJLINK SIM".to_string(),
            CommandCode::ProductName => "SIM-1000".to_string(),
            CommandCode::OtherInfo => "no warnings".to_string(),
            CommandCode::Class => "1".to_string(),
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pjlink=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("PJLink simulator v{}", pjlink::VERSION);

    let listener = match TcpListener::bind(&args.listen) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", args.listen, e);
            std::process::exit(1);
        }
    };
    tracing::info!("listening on {}", args.listen);

    let mut projector = Projector::new();

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(e) = serve_connection(stream, &mut projector) {
                    tracing::warn!("connection error: {}", e);
                }
            }
            Err(e) => tracing::warn!("accept failed: {}", e),
        }
    }
}

/// Serve one connection: read one command, apply it, reply, close
fn serve_connection(mut stream: TcpStream, projector: &mut Projector) -> std::io::Result<()> {
    let peer = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let mut buf = [0u8; MAX_REPLY_LEN];
    let n = stream.read(&mut buf)?;
    if n == 0 {
        tracing::debug!("{} connected and closed without a command", peer);
        return Ok(());
    }

    let command = match decode_command(&buf[..n]) {
        Ok(command) => command,
        Err(e) => {
            // Nothing decodable to echo back; drop the connection.
            tracing::warn!("undecodable command from {}: {}", peer, e);
            return Ok(());
        }
    };

    tracing::debug!(
        "{} -> {} {:?}",
        peer,
        command.code,
        command.parameter
    );

    let data = projector.execute(&command);
    let response = Response {
        code: command.code,
        version: command.version,
        data,
    };
    stream.write_all(&encode_response(&response))?;
    Ok(())
}
