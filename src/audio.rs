//! Audio cue sequencing
//!
//! Turns simulation edge events into start/stop/one-shot commands for
//! whatever backend actually plays sound. The backend stays stateless.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Engine rumble, looped while the flame is lit
    Thrust,
    /// Safe touchdown
    Landing,
    /// Crash
    Explosion,
}

/// Command for the audio backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueCommand {
    StartLoop { cue: SoundCue, volume: f32 },
    StopLoop(SoundCue),
    PlayOnce { cue: SoundCue, volume: f32 },
}

/// Tracks which loops are running so stops are never issued twice
#[derive(Debug, Clone)]
pub struct AudioCues {
    volume: f32,
    thrust_looping: bool,
}

impl Default for AudioCues {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AudioCues {
    pub fn new(settings: &Settings) -> Self {
        Self {
            volume: settings.effective_volume(),
            thrust_looping: false,
        }
    }

    /// Translate a batch of events into backend commands
    pub fn process(&mut self, events: &[GameEvent]) -> Vec<CueCommand> {
        let mut commands = Vec::new();
        for event in events {
            match event {
                // A silent loop is never started, so no stop is owed for it
                GameEvent::ThrustStarted => {
                    if !self.thrust_looping && self.volume > 0.0 {
                        self.thrust_looping = true;
                        commands.push(CueCommand::StartLoop {
                            cue: SoundCue::Thrust,
                            volume: self.volume,
                        });
                    }
                }
                GameEvent::ThrustStopped => self.stop_thrust(&mut commands),
                GameEvent::Landed { .. } => {
                    self.stop_thrust(&mut commands);
                    self.play(&mut commands, SoundCue::Landing);
                }
                GameEvent::Crashed => {
                    self.stop_thrust(&mut commands);
                    self.play(&mut commands, SoundCue::Explosion);
                }
                GameEvent::Started | GameEvent::Restarted { .. } => {}
            }
        }
        commands
    }

    fn stop_thrust(&mut self, commands: &mut Vec<CueCommand>) {
        if self.thrust_looping {
            self.thrust_looping = false;
            commands.push(CueCommand::StopLoop(SoundCue::Thrust));
        }
    }

    fn play(&self, commands: &mut Vec<CueCommand>, cue: SoundCue) {
        if self.volume > 0.0 {
            commands.push(CueCommand::PlayOnce {
                cue,
                volume: self.volume,
            });
        }
    }
}
