use std::path::{Path, PathBuf};

use anyhow::Context;
use msghub_bridge::message::Message;
use msghub_bridge::{BridgeChannels, PresentationCommand, PresentationEvent};
use msghub_convert::{ServiceException, XmlOptions, convert_exception, convert_xml};
use tokio::sync::mpsc::Receiver;

/// Status code reported for JSON payloads read from disk.
const FILE_STATUS_CODE: u16 = 500;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .context("failed to build logger instance")?;

    let config = match std::env::var_os("MSGHUB_CONFIG") {
        Some(path) => msghub_core::config::load_config_from(Path::new(&path))?,
        None => msghub_core::config::load_config()?,
    };
    let xml_options = XmlOptions::from(&config.xml);

    let mut channels = BridgeChannels::new(config.channel_capacity.max(1));
    let mut hub = msghub_core::MessageHub::new(channels.core_rx, channels.core_tx);

    for path in std::env::args_os().skip(1).map(PathBuf::from) {
        let messages = read_payload(&path, &xml_options)?;
        log::info!("Converted {} message(s) from {path:?}", messages.len());
        channels
            .presentation_tx
            .try_send(PresentationCommand::Append {
                messages,
                clear: config.append.clear,
                open_on_error: config.append.open_on_error,
            })
            .context("failed to queue append command")?;
        hub.drain();
        print_events(&mut channels.presentation_rx);
    }

    channels
        .presentation_tx
        .try_send(PresentationCommand::RequestSnapshot)
        .context("failed to queue snapshot request")?;
    hub.drain();
    print_events(&mut channels.presentation_rx);

    for message in hub.store().messages() {
        println!(
            "{:<12} {} {}",
            message.kind,
            message.title,
            message.subtitle.as_deref().unwrap_or_default()
        );
        if let Some(description) = &message.description {
            println!("{:<12} {description}", "");
        }
    }

    Ok(())
}

/// Reads a payload file and converts it. Documents starting with `<` are
/// treated as XML errors, anything else as a JSON response body.
fn read_payload(path: &Path, xml_options: &XmlOptions) -> anyhow::Result<Vec<Message>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload {path:?}"))?;

    if contents.trim_start().starts_with('<') {
        return Ok(convert_xml(&contents, xml_options));
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let exception = ServiceException::new(format!("Request {name} failed"), FILE_STATUS_CODE)
        .with_response_body(contents);
    Ok(convert_exception(&exception))
}

fn print_events(rx: &mut Receiver<PresentationEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            PresentationEvent::RevealRequested => println!("-- message surface revealed"),
            PresentationEvent::ActiveTitlePressed(message) => {
                println!("-- active title pressed: {}", message.title)
            }
            PresentationEvent::StateChanged {
                aggregate,
                messages,
            } => {
                println!(
                    "[{}] {:?} x{} ({} message(s))",
                    aggregate.icon.token(),
                    aggregate.emphasis,
                    aggregate.count,
                    messages.len()
                );
            }
        }
    }
}
