//! Unit tests for CLI module
//!
//! Drives whole invocations through `CliService` against in-memory players.
//! No D-Bus connection is involved.

#![allow(clippy::unwrap_used)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use clap::Parser;
use tracing::Level;
use zbus::{fdo, zvariant::OwnedValue};

use crate::{
    cli::{CliError, CliService, CommandRegistry, Invocation},
    services::mpris::{
        ARTIST_KEY, LENGTH_KEY, MediaError, MediaPlayer, Metadata, MetadataValue, PlaybackStatus,
        PlayerConnector, TITLE_KEY, URL_KEY,
    },
};

#[derive(Clone, Copy)]
enum OpenOutcome {
    Opens,
    Unsupported,
    Fails,
}

#[derive(Clone)]
struct FakePlayer {
    name: String,
    status: String,
    metadata: Metadata,
    position: i64,
    open: OpenOutcome,
    fail_properties: bool,
    fail_playback: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakePlayer {
    fn new(status: &str, metadata: Metadata, open: OpenOutcome) -> Self {
        Self {
            name: String::new(),
            status: status.to_string(),
            metadata,
            position: 1_000_000,
            open,
            fail_properties: false,
            fail_playback: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn playback(&self, call: &str) -> Result<(), MediaError> {
        self.record(call);
        if self.fail_playback {
            return Err(MediaError::Remote(fdo::Error::Failed(
                "player went away".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl MediaPlayer for FakePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_playlists(&self) -> bool {
        true
    }

    fn supports_tracklist(&self) -> bool {
        false
    }

    async fn playback_status(&self) -> Result<PlaybackStatus, MediaError> {
        self.record("PlaybackStatus");
        Ok(PlaybackStatus::from(self.status.as_str()))
    }

    async fn metadata(&self) -> Result<Metadata, MediaError> {
        self.record("Metadata");
        Ok(self.metadata.clone())
    }

    async fn position(&self) -> Result<i64, MediaError> {
        self.record("Position");
        Ok(self.position)
    }

    async fn player_properties(&self) -> Result<HashMap<String, OwnedValue>, MediaError> {
        self.record("GetAll");
        if self.fail_properties {
            return Err(MediaError::Remote(fdo::Error::Failed(
                "GetAll broken".to_string(),
            )));
        }
        Ok(HashMap::new())
    }

    async fn play(&self) -> Result<(), MediaError> {
        self.playback("Play")
    }

    async fn pause(&self) -> Result<(), MediaError> {
        self.playback("Pause")
    }

    async fn stop(&self) -> Result<(), MediaError> {
        self.playback("Stop")
    }

    async fn play_pause(&self) -> Result<(), MediaError> {
        self.playback("PlayPause")
    }

    async fn open_uri(&self, uri: &str) -> Result<(), MediaError> {
        self.record(&format!("OpenUri {uri}"));
        match self.open {
            OpenOutcome::Opens => Ok(()),
            OpenOutcome::Unsupported => Err(MediaError::from_call(
                &self.name,
                "OpenUri",
                fdo::Error::UnknownMethod("Unknown method OpenUri".to_string()),
            )),
            OpenOutcome::Fails => Err(MediaError::from_call(
                &self.name,
                "OpenUri",
                fdo::Error::Failed("cannot decode stream".to_string()),
            )),
        }
    }
}

struct FakeBus {
    services: Vec<String>,
    player: FakePlayer,
    listings: Arc<Mutex<usize>>,
    connects: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl PlayerConnector for FakeBus {
    async fn list_services(&self) -> Result<Vec<String>, MediaError> {
        *self.listings.lock().unwrap() += 1;
        Ok(self.services.clone())
    }

    async fn connect(&self, name: &str) -> Result<Box<dyn MediaPlayer>, MediaError> {
        self.connects.lock().unwrap().push(name.to_string());
        let mut player = self.player.clone();
        player.name = name.to_string();
        Ok(Box::new(player))
    }
}

struct Harness {
    service: CliService,
    calls: Arc<Mutex<Vec<String>>>,
    listings: Arc<Mutex<usize>>,
    connects: Arc<Mutex<Vec<String>>>,
}

impl Harness {
    fn new(status: &str, metadata: Metadata, open: OpenOutcome) -> Self {
        Self::with_player(FakePlayer::new(status, metadata, open))
    }

    fn with_player(player: FakePlayer) -> Self {
        let calls = player.calls.clone();
        let listings = Arc::new(Mutex::new(0));
        let connects = Arc::new(Mutex::new(Vec::new()));

        let bus = FakeBus {
            services: vec![
                "org.mpris.MediaPlayer2.vlc".to_string(),
                "org.mpris.MediaPlayer2.spotify".to_string(),
            ],
            player,
            listings: listings.clone(),
            connects: connects.clone(),
        };

        Self {
            service: CliService::new(bus, 0),
            calls,
            listings,
            connects,
        }
    }

    fn playing() -> Self {
        Self::new("Playing", track(), OpenOutcome::Opens)
    }

    async fn run(&self, argv: &[&str]) -> (Result<(), CliError>, String) {
        let mut full = vec!["mprisctl"];
        full.extend_from_slice(argv);
        let invocation = Invocation::try_parse_from(full).unwrap();

        let mut out = Vec::new();
        let result = self.service.run(&invocation, &mut out).await;

        (result, String::from_utf8(out).unwrap())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn track() -> Metadata {
    [
        (TITLE_KEY.to_string(), MetadataValue::Text("Song".into())),
        (
            ARTIST_KEY.to_string(),
            MetadataValue::TextList(vec!["A".into(), "B".into(), "C".into()]),
        ),
        (LENGTH_KEY.to_string(), MetadataValue::Integer(61_000_000)),
    ]
    .into_iter()
    .collect()
}

const CATALOGUE: &str = "The following commands are supported:\n\
\tstatus\tshow player status\n\
\ttoggle\ttoggle play/pause state\n\
\tstop\tstop playback\n\
\tplay\tstart playback\n\
\tpause\tpause playback\n\
\topen URI\topen media from URI and playback\n";

#[test]
fn catalogue_lists_commands_in_order() {
    let registry = CommandRegistry::with_default_commands();
    assert_eq!(format!("{}\n", registry.catalogue()), CATALOGUE);
}

#[test]
fn registering_same_name_replaces_command() {
    let mut registry = CommandRegistry::with_default_commands();
    registry.register_command(Box::new(crate::cli::StatusCommand::new()));

    assert_eq!(format!("{}\n", registry.catalogue()), CATALOGUE);
    assert!(registry.find("status").is_some());
    assert!(registry.find("services").is_none());
}

#[tokio::test]
async fn commands_flag_prints_catalogue_without_touching_the_bus() {
    let harness = Harness::playing();

    let (result, output) = harness.run(&["--commands", "-v", "-s", "7", "open"]).await;

    assert!(result.is_ok());
    assert_eq!(output, CATALOGUE);
    assert_eq!(*harness.listings.lock().unwrap(), 0);
    assert!(harness.connects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn services_lists_every_service_with_index() {
    let harness = Harness::playing();

    let (result, output) = harness.run(&["services"]).await;

    assert!(result.is_ok());
    assert_eq!(
        output,
        "  0: org.mpris.MediaPlayer2.vlc\n  1: org.mpris.MediaPlayer2.spotify\n"
    );
    assert!(harness.connects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_service_fails_without_player_interaction() {
    let harness = Harness::playing();

    let (result, output) = harness.run(&["-s", "2", "play"]).await;

    let error = result.unwrap_err();
    assert!(matches!(error, CliError::ServiceNotFound(2)));
    assert_eq!(error.to_string(), "MPRIS2 service no. 2 not found.");
    assert_eq!(error.exit_code(), 1);
    assert!(output.is_empty());
    assert!(harness.connects.lock().unwrap().is_empty());
    assert!(harness.calls().is_empty());
}

#[tokio::test]
async fn selects_the_requested_service() {
    let harness = Harness::playing();

    let (result, _) = harness.run(&["--service", "1", "stop"]).await;

    assert!(result.is_ok());
    assert_eq!(
        *harness.connects.lock().unwrap(),
        vec!["org.mpris.MediaPlayer2.spotify"]
    );
}

#[tokio::test]
async fn status_of_playing_track() {
    let harness = Harness::playing();

    let (result, output) = harness.run(&[]).await;

    assert!(result.is_ok());
    assert_eq!(output, "Playing: \"Song\" by A, B, C (0:01/1:01)\n");
}

#[tokio::test]
async fn status_of_stream_without_length_or_title() {
    let metadata: Metadata = [(
        URL_KEY.to_string(),
        MetadataValue::Text("http://radio.example/live".into()),
    )]
    .into_iter()
    .collect();
    let harness = Harness::new("Paused", metadata, OpenOutcome::Opens);

    let (result, output) = harness.run(&["status"]).await;

    assert!(result.is_ok());
    assert_eq!(
        output,
        "Paused: \"http://radio.example/live\" by [Unknown]\n"
    );
}

#[tokio::test]
async fn status_of_stopped_player_is_raw_token_only() {
    let harness = Harness::new("Stopped", track(), OpenOutcome::Opens);

    let (result, output) = harness.run(&["status"]).await;

    assert!(result.is_ok());
    assert_eq!(output, "Stopped\n");
    assert_eq!(harness.calls(), vec!["PlaybackStatus"]);
}

#[tokio::test]
async fn verbose_status_reports_support_and_raw_metadata() {
    let harness = Harness::playing();

    let (result, output) = harness.run(&["-v", "status"]).await;

    assert!(result.is_ok());
    assert_eq!(
        output,
        "selected service org.mpris.MediaPlayer2.vlc\n\
         \x20 playlists support:\ttrue\n\
         \x20 tracklist support:\tfalse\n\
         Playing: \"Song\" by A, B, C (0:01/1:01)\n\
         Raw metadata listing:\n\
         \x20 mpris:length\t= 61000000\n\
         \x20 xesam:artist\t= [A, B, C]\n\
         \x20 xesam:title\t= Song\n"
    );
}

#[tokio::test]
async fn playback_commands_announce_then_call() {
    let cases = [
        ("toggle", "toggling play/pause state\n", "PlayPause"),
        ("stop", "stopping playback\n", "Stop"),
        ("play", "starting playback\n", "Play"),
        ("pause", "pausing playback\n", "Pause"),
    ];

    for (command, announcement, call) in cases {
        let harness = Harness::playing();

        let (result, output) = harness.run(&[command]).await;

        assert!(result.is_ok(), "{command} failed");
        assert_eq!(output, announcement);
        assert_eq!(harness.calls(), vec![call]);
    }
}

#[tokio::test]
async fn open_passes_uri_to_player() {
    let harness = Harness::playing();

    let (result, output) = harness.run(&["open", "file:///music/a.ogg"]).await;

    assert!(result.is_ok());
    assert_eq!(output, "opening file:///music/a.ogg\n");
    assert_eq!(harness.calls(), vec!["OpenUri file:///music/a.ogg"]);
}

#[tokio::test]
async fn open_on_service_without_uri_support() {
    let harness = Harness::new("Playing", track(), OpenOutcome::Unsupported);

    let (result, output) = harness.run(&["open", "file:///music/a.ogg"]).await;

    let error = result.unwrap_err();
    assert_eq!(output, "opening file:///music/a.ogg\n");
    assert_eq!(
        error.to_string(),
        "Error: Service org.mpris.MediaPlayer2.vlc does not support opening URIs via MPRIS2."
    );
    assert_eq!(error.exit_code(), 1);
}

#[tokio::test]
async fn open_with_generic_failure() {
    let harness = Harness::new("Playing", track(), OpenOutcome::Fails);

    let (result, _) = harness.run(&["open", "file:///music/a.ogg"]).await;

    let error = result.unwrap_err();
    assert!(matches!(error, CliError::UnexpectedError(_)));
    assert!(error.to_string().starts_with("Unexpected error: "));
    assert!(error.to_string().contains("cannot decode stream"));
    assert_eq!(error.exit_code(), 1);
}

#[tokio::test]
async fn open_requires_exactly_one_uri() {
    let harness = Harness::playing();

    let (missing, _) = harness.run(&["open"]).await;
    let (extra, _) = harness.run(&["open", "a", "b"]).await;

    assert!(matches!(missing, Err(CliError::InvalidArguments(_))));
    assert!(matches!(extra, Err(CliError::InvalidArguments(_))));
    assert!(harness.calls().is_empty());
}

#[tokio::test]
async fn unknown_command_is_reported() {
    let harness = Harness::playing();

    let (result, output) = harness.run(&["dance"]).await;

    let error = result.unwrap_err();
    assert!(matches!(&error, CliError::CommandNotFound(word) if word == "dance"));
    assert_eq!(error.to_string(), "unknown command: dance");
    assert_eq!(error.exit_code(), 1);
    assert!(output.is_empty());
    assert!(harness.calls().is_empty());
}

#[tokio::test]
async fn configured_default_service_is_used_without_flag() {
    let connects = Arc::new(Mutex::new(Vec::new()));
    let mut player = FakePlayer::new("Stopped", Metadata::default(), OpenOutcome::Opens);
    player.position = 0;
    let bus = FakeBus {
        services: vec![
            "org.mpris.MediaPlayer2.vlc".to_string(),
            "org.mpris.MediaPlayer2.mpv".to_string(),
        ],
        player,
        listings: Arc::new(Mutex::new(0)),
        connects: connects.clone(),
    };
    let service = CliService::new(bus, 1);

    let invocation = Invocation::try_parse_from(["mprisctl"]).unwrap();
    let mut out = Vec::new();
    service.run(&invocation, &mut out).await.unwrap();

    assert_eq!(*connects.lock().unwrap(), vec!["org.mpris.MediaPlayer2.mpv"]);
    assert_eq!(String::from_utf8(out).unwrap(), "Stopped\n");
}

#[tokio::test]
async fn status_without_title_url_or_artist_uses_placeholders() {
    let harness = Harness::new("Playing", Metadata::default(), OpenOutcome::Opens);

    let (result, output) = harness.run(&["status"]).await;

    assert!(result.is_ok());
    assert_eq!(output, "Playing: \"[Unknown]\" by [Unknown]\n");
}

#[tokio::test]
async fn failing_property_listing_does_not_stop_the_command() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .finish();
    let _default = tracing::subscriber::set_default(subscriber);

    let mut player = FakePlayer::new("Playing", track(), OpenOutcome::Opens);
    player.fail_properties = true;
    let harness = Harness::with_player(player);

    let (result, output) = harness.run(&["-v", "play"]).await;

    assert!(result.is_ok());
    assert!(output.ends_with("starting playback\n"));
    assert_eq!(harness.calls(), vec!["GetAll", "Play"]);
}

#[tokio::test]
async fn remote_failure_names_the_selected_service() {
    let mut player = FakePlayer::new("Playing", track(), OpenOutcome::Opens);
    player.fail_playback = true;
    let harness = Harness::with_player(player);

    let (result, output) = harness.run(&["-s", "1", "pause"]).await;

    let error = result.unwrap_err();
    assert_eq!(output, "pausing playback\n");
    assert!(matches!(
        &error,
        CliError::ServiceError { service, .. } if service == "org.mpris.MediaPlayer2.spotify"
    ));
    assert!(error.to_string().contains("player went away"));
    assert_eq!(error.exit_code(), 1);
}
