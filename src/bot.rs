// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// Bot wires the configuration and the debug logger around the decision
// function and exposes one method per API endpoint.

use log::{info, warn};

use crate::config::Config;
use crate::debug_logger::{DebugLogger, DecisionLogEntry};
use crate::decision::{decide_move_with, Decision, DecisionError};
use crate::types::{MoveRequest, MoveResponse, StartRequest, StartResponse};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and no decision log
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Self::with_debug_logger(config, DebugLogger::disabled())
    }

    /// Creates a Bot that records every decision through `debug_logger`
    pub fn with_debug_logger(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> StartResponse {
        info!("INFO");
        self.config.appearance.start_response()
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, request: &StartRequest) -> StartResponse {
        info!(
            "GAME START {} ({}x{})",
            request.game_id, request.width, request.height
        );
        self.config.appearance.start_response()
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self) {
        info!("GAME OVER");
    }

    /// Runs the decision function for one turn
    pub fn decide(&self, request: &MoveRequest) -> Result<Decision, DecisionError> {
        decide_move_with(&request.board, &request.you, &self.config.decision.policy())
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// Malformed boards never fail the request: the error is logged and the
    /// configured fallback move is sent instead.
    pub fn get_move(&self, request: &MoveRequest) -> MoveResponse {
        let decision = match self.decide(request) {
            Ok(decision) => decision,
            Err(e) => {
                warn!(
                    "Turn {}: {}; sending fallback {}",
                    request.turn,
                    e,
                    self.config.decision.fallback_move.as_str()
                );
                return MoveResponse {
                    direction: self.config.decision.fallback_move,
                    taunt: self.config.decision.move_taunt.clone(),
                };
            }
        };

        info!(
            "Turn {}: Chose {} toward {} (attack mode: {}, trapped: {})",
            request.turn,
            decision.chosen.as_str(),
            decision.target,
            decision.attack_mode(),
            decision.trapped
        );

        if self.debug_logger.is_enabled() {
            self.debug_logger.log_decision(DecisionLogEntry::new(
                request.turn,
                &request.you,
                request.board.clone(),
                &decision,
            ));
        }

        let taunt = if decision.attack_mode() {
            &self.config.decision.attack_taunt
        } else {
            &self.config.decision.move_taunt
        };

        MoveResponse {
            direction: decision.chosen,
            taunt: taunt.clone(),
        }
    }
}
