//! Drive one round to completion by asking each player's strategy in turn.

use tracing::{debug, warn};

use crate::ai::{AiError, PlayerStrategy, SeatStrategies};
use crate::domain::poverty::PovertyStage;
use crate::domain::state::{Phase, PlayOutcome, Round};
use crate::domain::PlayerId;
use crate::error::EngineError;
use crate::errors::DomainError;

/// Play `round` until it is complete.
///
/// The first rejected decision or strategy failure aborts the round and is
/// returned as is.
pub fn drive_round(mut round: Round, strategies: &SeatStrategies) -> Result<Round, EngineError> {
    while !round.is_complete() {
        let actor = round.current_player();
        let strategy = strategies.for_player(actor);
        step(&mut round, actor, strategy).inspect_err(|err| {
            warn!(
                player = %actor,
                phase = %round.phase(),
                trick_no = round.trick_number(),
                code = %err.code(),
                error = %err,
                "Round aborted"
            );
        })?;
    }
    Ok(round)
}

fn step(round: &mut Round, actor: PlayerId, strategy: &dyn PlayerStrategy) -> Result<(), EngineError> {
    let ask = |source: AiError| EngineError::strategy(actor, source);
    match round.phase() {
        Phase::Variant => {
            let bid = strategy.choose_variant(round, actor).map_err(ask)?;
            round.nominate_variant(actor, bid)?;
        }
        Phase::Armut => {
            let stage = round.poverty().map(|exchange| exchange.stage);
            match stage {
                Some(PovertyStage::AwaitingCards) => {
                    let cards = strategy.choose_poverty_cards(round, actor).map_err(ask)?;
                    round.hand_over_poverty_cards(actor, &cards)?;
                }
                Some(PovertyStage::Offering) => {
                    let accept = strategy.accept_poverty(round, actor).map_err(ask)?;
                    round.respond_to_poverty(actor, accept)?;
                }
                Some(PovertyStage::AwaitingReturn) => {
                    let cards = strategy.choose_return_cards(round, actor).map_err(ask)?;
                    round.return_poverty_cards(actor, &cards)?;
                }
                _ => {
                    return Err(DomainError::InvariantViolation(format!(
                        "armut phase with exchange stage {stage:?}"
                    ))
                    .into())
                }
            }
        }
        Phase::Playing => {
            if let Some(kind) = strategy.choose_announcement(round, actor).map_err(ask)? {
                round.announce(actor, kind)?;
            }
            let card = strategy.choose_play(round, actor).map_err(ask)?;
            if let PlayOutcome::TrickComplete { winner } | PlayOutcome::RoundComplete { winner } =
                round.play_card(actor, card)?
            {
                debug!(trick_no = round.trick_number(), %winner, "Trick taken");
            }
        }
        Phase::Complete => {}
    }
    Ok(())
}
