use std::io::{self, Write};
use std::time::Duration;

use backstraightener_core::{
    drive, Alert, BellAlert, Config, CoreError, CountdownController, DisplayTriple, Event,
    SilentAlert, WheelPanel,
};
use clap::Args;

use crate::panel::TerminalPanel;

#[derive(Args)]
pub struct StartArgs {
    /// Hours wheel value (clamped to the wheel)
    #[arg(long, short = 'H', default_value_t = 0, allow_negative_numbers = true)]
    hours: i64,
    /// Minutes wheel value (clamped to the wheel)
    #[arg(long, short = 'm', default_value_t = 0, allow_negative_numbers = true)]
    minutes: i64,
    /// Seconds wheel value (clamped to the wheel)
    #[arg(long, short = 's', default_value_t = 0, allow_negative_numbers = true)]
    seconds: i64,
    /// Print events as JSON lines on stdout; the wheels are drawn on stderr
    #[arg(long)]
    json: bool,
    /// Override the tick cadence in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Skip the completion alert for this run
    #[arg(long)]
    silent: bool,
}

/// Print events either as JSON lines or as short status messages.
fn event_sink(json: bool) -> impl FnMut(Event) {
    move |event| {
        if json {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!(error = %e, "failed to encode event"),
            }
            return;
        }
        match event {
            Event::CountdownCompleted { .. } => println!("time's up"),
            Event::CountdownStopped { display, .. } => println!("stopped with {display} left"),
            _ => {}
        }
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C, countdown can't be stopped");
        std::future::pending::<()>().await;
    }
}

pub fn run(args: StartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut controller_config = config.controller_config();
    if let Some(ms) = args.tick_ms {
        controller_config.tick_interval = Duration::from_millis(ms);
    }
    controller_config.validate().map_err(CoreError::from)?;

    let (hours, minutes, seconds) =
        controller_config.wheels.clamp(args.hours, args.minutes, args.seconds);

    let out: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut panel = TerminalPanel::new(out);
    panel.show(DisplayTriple {
        hours: hours.into(),
        minutes: minutes.into(),
        seconds: seconds.into(),
    });

    let alert: Box<dyn Alert> = if config.alert.enabled && !args.silent {
        Box::new(BellAlert::new(io::stderr()))
    } else {
        Box::new(SilentAlert)
    };

    let mut controller = CountdownController::new(controller_config, panel, alert);
    let mut sink = event_sink(args.json);

    if let Some(event) = controller.request_start(hours.into(), minutes.into(), seconds.into()) {
        sink(event);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(drive(&mut controller, ctrl_c(), &mut sink));
    tracing::debug!(?outcome, "countdown finished");

    Ok(())
}
