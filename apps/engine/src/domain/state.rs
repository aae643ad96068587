//! Round state machine.
//!
//! A round moves `Variant → [Armut] → Playing → Complete`; the phase never
//! moves backwards. Every mutating operation checks phase and turn first and
//! leaves the round untouched when it rejects an action.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::announcements::{self, Announcement, AnnouncementKind};
use crate::domain::cards_serde::{token_hands, token_list};
use crate::domain::dealing::{build_deck, deal, shuffle};
use crate::domain::poverty::{self, PovertyExchange, PovertyStage};
use crate::domain::rules::{DECK_SIZE, PLAYERS, TRICKS_PER_ROUND};
use crate::domain::scoring::{self, TeamPoints};
use crate::domain::teams::{assign_teams, ensure_distinct, Team, TeamAssignment};
use crate::domain::tricks::{self, Play, Trick};
use crate::domain::variants::{self, GameMode, VariantBid, VariantNomination};
use crate::domain::{Card, Player, PlayerId};
use crate::errors::domain::DomainError;

/// Round progression phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players nominate a game variant in seat order.
    Variant,
    /// Poverty card exchange.
    Armut,
    /// Tricks are played.
    Playing,
    /// Scored; no further changes.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Variant => "variant",
            Phase::Armut => "armut",
            Phase::Playing => "playing",
            Phase::Complete => "complete",
        })
    }
}

/// What a successful `play_card` did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayOutcome {
    Played,
    TrickComplete { winner: PlayerId },
    RoundComplete { winner: PlayerId },
}

/// One round of Doppelkopf for four players.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundFields")]
pub struct Round {
    players: [Player; PLAYERS],
    #[serde(with = "token_hands")]
    hands: BTreeMap<PlayerId, Vec<Card>>,
    first_player: PlayerId,
    current_player: PlayerId,
    #[serde(with = "token_list")]
    eligible_cards: Vec<Card>,
    mode: GameMode,
    phase: Phase,
    player_teams: TeamAssignment,
    variant_nominations: Vec<VariantNomination>,
    poverty: Option<PovertyExchange>,
    announcements: Vec<Announcement>,
    tricks: Vec<Trick>,
    current_trick: Vec<Play>,
    score: TeamPoints,
    final_score: TeamPoints,
    winner: Option<Team>,
    #[serde(with = "time::serde::rfc3339")]
    start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    end_time: Option<OffsetDateTime>,
}

fn seat_players(players: &[Player]) -> Result<[Player; PLAYERS], DomainError> {
    let seated: [Player; PLAYERS] =
        players
            .to_vec()
            .try_into()
            .map_err(|rejected: Vec<Player>| DomainError::InvalidPlayerCount {
                expected: PLAYERS,
                actual: rejected.len(),
            })?;
    let ids: Vec<PlayerId> = seated.iter().map(|p| p.uuid).collect();
    ensure_distinct(&ids)?;
    Ok(seated)
}

impl Round {
    /// Shuffle, deal, pick the first player and assign teams.
    pub fn start<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Result<Self, DomainError> {
        let players = seat_players(players)?;
        let ids: Vec<PlayerId> = players.iter().map(|p| p.uuid).collect();

        let deck = shuffle(build_deck(), rng);
        let hands = deal(&deck, PLAYERS)?;
        let first_seat = rng.random_range(0..PLAYERS);
        let teams = assign_teams(&ids, rng)?;

        let mut round = Self::assemble(players, hands, first_seat);
        round.settle_teams(teams);
        debug!(
            first_player = %round.first_player,
            re = ?round.player_teams.members(Team::Re),
            "Round dealt"
        );
        Ok(round)
    }

    /// Start a round from a predetermined deal.
    ///
    /// `hands` are in seat order and must together form one full deck;
    /// `teams` must place every player on re or kontra, two each.
    pub fn with_deal(
        players: &[Player],
        hands: Vec<Vec<Card>>,
        first_seat: usize,
        teams: TeamAssignment,
    ) -> Result<Self, DomainError> {
        let players = seat_players(players)?;
        if hands.len() != PLAYERS || first_seat >= PLAYERS {
            return Err(DomainError::InvalidDeal {
                detail: format!(
                    "{} hands with first seat {first_seat} for {PLAYERS} players",
                    hands.len()
                ),
            });
        }
        let mut dealt: Vec<Card> = hands.iter().flatten().copied().collect();
        let mut deck = build_deck();
        dealt.sort();
        deck.sort();
        if dealt != deck {
            return Err(DomainError::InvalidDeal {
                detail: "hands do not form a full deck".into(),
            });
        }
        if !teams.is_finalized() || players.iter().any(|p| teams.team_of(p.uuid) == Team::Unknown) {
            return Err(DomainError::InvalidDeal {
                detail: "team assignment does not cover the seated players".into(),
            });
        }
        let mut round = Self::assemble(players, hands, first_seat);
        round.settle_teams(teams);
        Ok(round)
    }

    /// Teams start out unknown; see [`Round::settle_teams`].
    fn assemble(players: [Player; PLAYERS], hands: Vec<Vec<Card>>, first_seat: usize) -> Self {
        let first_player = players[first_seat].uuid;
        let ids: Vec<PlayerId> = players.iter().map(|p| p.uuid).collect();
        let hands: BTreeMap<PlayerId, Vec<Card>> =
            players.iter().map(|p| p.uuid).zip(hands).collect();
        Self {
            players,
            hands,
            first_player,
            current_player: first_player,
            eligible_cards: Vec::new(),
            mode: GameMode::Normal,
            phase: Phase::Variant,
            player_teams: TeamAssignment::unknown(&ids),
            variant_nominations: Vec::with_capacity(PLAYERS),
            poverty: None,
            announcements: Vec::new(),
            tricks: Vec::with_capacity(TRICKS_PER_ROUND),
            current_trick: Vec::with_capacity(PLAYERS),
            score: TeamPoints::default(),
            final_score: TeamPoints::default(),
            winner: None,
            start_time: OffsetDateTime::now_utc(),
            end_time: None,
        }
    }

    // ---- read access ----

    pub fn players(&self) -> &[Player; PLAYERS] {
        &self.players
    }

    pub fn player_ids(&self) -> [PlayerId; PLAYERS] {
        std::array::from_fn(|seat| self.players[seat].uuid)
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.uuid == player)
    }

    pub fn hands(&self) -> &BTreeMap<PlayerId, Vec<Card>> {
        &self.hands
    }

    pub fn hand(&self, player: PlayerId) -> &[Card] {
        self.hands.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Cards the current player may play; empty outside the playing phase.
    pub fn eligible_cards(&self) -> &[Card] {
        &self.eligible_cards
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn player_teams(&self) -> &TeamAssignment {
        &self.player_teams
    }

    pub fn variant_nominations(&self) -> &[VariantNomination] {
        &self.variant_nominations
    }

    pub fn poverty(&self) -> Option<&PovertyExchange> {
        self.poverty.as_ref()
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn current_trick(&self) -> &[Play] {
        &self.current_trick
    }

    /// Completed tricks so far.
    pub fn trick_number(&self) -> u8 {
        self.tricks.len() as u8
    }

    /// Card points per team; filled in when the round completes.
    pub fn score(&self) -> TeamPoints {
        self.score
    }

    /// Game points per team; filled in when the round completes.
    pub fn final_score(&self) -> TeamPoints {
        self.final_score
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    pub fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> Option<OffsetDateTime> {
        self.end_time
    }

    /// Bids `player` could nominate now; empty when it is not their nomination.
    pub fn legal_variant_bids(&self, player: PlayerId) -> Vec<VariantBid> {
        if self.phase != Phase::Variant || player != self.current_player {
            return Vec::new();
        }
        variants::legal_bids(self.hand(player))
    }

    /// Announcements `player` could make now.
    pub fn eligible_announcements(&self, player: PlayerId) -> Vec<AnnouncementKind> {
        if self.phase != Phase::Playing || player != self.current_player {
            return Vec::new();
        }
        announcements::eligible_announcements(
            self.player_teams.team_of(player),
            self.trick_number(),
            &self.announcements,
        )
    }

    /// Cards in hands, on offer, in the open trick and in completed tricks.
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.hands.values().map(Vec::len).sum();
        let in_transit = self
            .poverty
            .as_ref()
            .map_or(0, PovertyExchange::cards_in_transit);
        in_hands + in_transit + self.current_trick.len() + self.tricks.len() * PLAYERS
    }

    // ---- transitions ----

    /// Record `player`'s variant nomination; the fourth one resolves the mode.
    pub fn nominate_variant(&mut self, player: PlayerId, bid: VariantBid) -> Result<(), DomainError> {
        self.ensure_phase(Phase::Variant, "nominate_variant")?;
        self.ensure_turn(player)?;
        variants::check_nomination(player, self.hand(player), bid)?;

        self.variant_nominations.push(VariantNomination { player, bid });
        debug!(%player, %bid, "Variant nominated");
        if self.variant_nominations.len() < PLAYERS {
            self.current_player = self.next_after(player);
            return Ok(());
        }

        let decision = variants::resolve_mode(&self.variant_nominations);
        self.mode = decision.mode;
        match (decision.mode, decision.declarer) {
            (GameMode::Solo, Some(soloist)) => {
                self.player_teams.move_to_re(soloist);
                self.begin_play(soloist);
            }
            (GameMode::Armut, Some(poor)) => {
                self.poverty = Some(PovertyExchange::new(poor));
                self.phase = Phase::Armut;
                self.current_player = poor;
            }
            _ => self.begin_play(self.first_player),
        }
        debug!(mode = %self.mode, phase = %self.phase, "Variant resolved");
        Ok(())
    }

    /// The poor player puts three cards, all their trumps included, on offer.
    pub fn hand_over_poverty_cards(
        &mut self,
        player: PlayerId,
        cards: &[Card],
    ) -> Result<(), DomainError> {
        const OP: &str = "hand_over_poverty_cards";
        self.ensure_phase(Phase::Armut, OP)?;
        self.ensure_turn(player)?;
        self.ensure_stage(PovertyStage::AwaitingCards, OP)?;
        poverty::check_hand_over(player, self.hand(player), cards)?;

        if let Some(hand) = self.hands.get_mut(&player) {
            poverty::take_cards(hand, cards);
        }
        if let Some(exchange) = self.poverty.as_mut() {
            exchange.offered = cards.to_vec();
            exchange.stage = PovertyStage::Offering;
        }
        self.current_player = self.next_after(player);
        debug!(%player, "Poverty cards on offer");
        self.check_card_conservation()
    }

    /// Accept or decline the cards on offer.
    pub fn respond_to_poverty(&mut self, player: PlayerId, accept: bool) -> Result<(), DomainError> {
        const OP: &str = "respond_to_poverty";
        self.ensure_phase(Phase::Armut, OP)?;
        self.ensure_turn(player)?;
        self.ensure_stage(PovertyStage::Offering, OP)?;
        let Some(exchange) = self.poverty.as_mut() else {
            return Err(DomainError::InvariantViolation(
                "armut phase without an exchange".into(),
            ));
        };

        if accept {
            let offered = std::mem::take(&mut exchange.offered);
            exchange.partner = Some(player);
            exchange.stage = PovertyStage::AwaitingReturn;
            self.hands.entry(player).or_default().extend(offered);
            debug!(%player, "Poverty accepted");
            return self.check_card_conservation();
        }

        exchange.declined_by.push(player);
        if exchange.declined_by.len() < PLAYERS - 1 {
            self.current_player = self.next_after(player);
            return Ok(());
        }

        let offered = std::mem::take(&mut exchange.offered);
        exchange.stage = PovertyStage::Declined;
        let poor = exchange.poor;
        self.hands.entry(poor).or_default().extend(offered);
        self.mode = GameMode::Normal;
        self.begin_play(self.first_player);
        debug!(%poor, "Poverty declined by everyone, playing a normal game");
        self.check_card_conservation()
    }

    /// The accepting partner gives three cards of their choice back.
    pub fn return_poverty_cards(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), DomainError> {
        const OP: &str = "return_poverty_cards";
        self.ensure_phase(Phase::Armut, OP)?;
        self.ensure_turn(player)?;
        self.ensure_stage(PovertyStage::AwaitingReturn, OP)?;
        poverty::check_return(player, self.hand(player), cards)?;
        let poor = self
            .poverty
            .as_ref()
            .map(|exchange| exchange.poor)
            .ok_or_else(|| DomainError::InvariantViolation("armut phase without an exchange".into()))?;

        if let Some(hand) = self.hands.get_mut(&player) {
            poverty::take_cards(hand, cards);
        }
        self.hands.entry(poor).or_default().extend_from_slice(cards);
        if let Some(exchange) = self.poverty.as_mut() {
            exchange.returned = cards.to_vec();
            exchange.stage = PovertyStage::Accepted;
        }
        self.player_teams = TeamAssignment::with_re(&self.player_ids(), [poor, player]);
        self.begin_play(poor);
        debug!(%poor, partner = %player, "Poverty exchange settled");
        self.check_card_conservation()
    }

    /// Announce for the player's team before playing a card.
    pub fn announce(&mut self, player: PlayerId, kind: AnnouncementKind) -> Result<(), DomainError> {
        self.ensure_phase(Phase::Playing, "announce")?;
        self.ensure_turn(player)?;
        let team = self.player_teams.team_of(player);
        let trick_number = self.trick_number();
        announcements::check_announcement(kind, team, trick_number, &self.announcements).map_err(
            |reason| DomainError::IneligibleAnnouncement {
                player,
                kind,
                trick_no: trick_number,
                reason,
            },
        )?;
        self.announcements.push(Announcement {
            player,
            team,
            kind,
            trick_number,
            timestamp: OffsetDateTime::now_utc(),
        });
        debug!(%player, %team, %kind, trick_number, "Announcement");
        Ok(())
    }

    /// Play `card` for `player`, resolving the trick and the round as they fill up.
    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<PlayOutcome, DomainError> {
        self.ensure_phase(Phase::Playing, "play_card")?;
        self.ensure_turn(player)?;
        let trick_no = self.trick_number() + 1;
        if self.current_trick.is_empty() {
            tricks::ensure_hands_ready(&self.hands, &self.player_ids(), trick_no)?;
        }
        tricks::play_card(&mut self.hands, player, card, &mut self.current_trick, trick_no)?;

        if self.current_trick.len() < PLAYERS {
            self.current_player = self.next_after(player);
            self.refresh_eligible();
            return Ok(PlayOutcome::Played);
        }

        let winner = tricks::resolve_trick(&self.current_trick)?.player;
        let plays = std::mem::take(&mut self.current_trick);
        self.tricks.push(Trick { plays, winner });
        self.current_player = winner;
        self.check_card_conservation()?;
        debug!(trick_no, %winner, "Trick complete");

        if self.tricks.len() == TRICKS_PER_ROUND {
            self.finish();
            return Ok(PlayOutcome::RoundComplete { winner });
        }
        self.refresh_eligible();
        Ok(PlayOutcome::TrickComplete { winner })
    }

    // ---- internals ----

    /// Assigned once, right after the deal.
    fn settle_teams(&mut self, teams: TeamAssignment) {
        debug_assert!(self.player_teams.members(Team::Unknown).len() == PLAYERS);
        self.player_teams = teams;
    }

    fn ensure_phase(&self, expected: Phase, operation: &'static str) -> Result<(), DomainError> {
        match self.phase {
            Phase::Complete => Err(DomainError::RoundAlreadyComplete),
            phase if phase == expected => Ok(()),
            phase => Err(DomainError::PhaseMismatch { operation, phase }),
        }
    }

    fn ensure_turn(&self, player: PlayerId) -> Result<(), DomainError> {
        if player != self.current_player {
            return Err(DomainError::NotYourTurn {
                player,
                expected: self.current_player,
            });
        }
        Ok(())
    }

    fn ensure_stage(&self, stage: PovertyStage, operation: &'static str) -> Result<(), DomainError> {
        match &self.poverty {
            Some(exchange) if exchange.stage == stage => Ok(()),
            _ => Err(DomainError::PhaseMismatch {
                operation,
                phase: self.phase,
            }),
        }
    }

    fn next_after(&self, player: PlayerId) -> PlayerId {
        let seat = self.seat_of(player).unwrap_or(0);
        self.players[(seat + 1) % PLAYERS].uuid
    }

    fn begin_play(&mut self, leader: PlayerId) {
        self.phase = Phase::Playing;
        self.current_player = leader;
        self.refresh_eligible();
    }

    fn refresh_eligible(&mut self) {
        let eligible = tricks::eligible_cards(self.hand(self.current_player), &self.current_trick);
        self.eligible_cards = eligible;
    }

    fn check_card_conservation(&self) -> Result<(), DomainError> {
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(DomainError::InvariantViolation(format!(
                "{count} cards in play, expected {DECK_SIZE}"
            )));
        }
        Ok(())
    }

    fn finish(&mut self) {
        let (points, tricks_won) = scoring::card_points(&self.tricks, &self.player_teams);
        let result = scoring::evaluate(points, tricks_won, &self.announcements);
        self.score = points;
        self.final_score = result.game_points;
        self.winner = result.winner;
        self.eligible_cards.clear();
        self.end_time = Some(OffsetDateTime::now_utc());
        self.phase = Phase::Complete;
        debug!(
            re = points.re,
            kontra = points.kontra,
            winner = ?result.winner,
            "Round scored"
        );
    }
}

/// Wire form of [`Round`]; checked before it becomes one.
#[derive(Deserialize)]
struct RoundFields {
    players: [Player; PLAYERS],
    #[serde(with = "token_hands")]
    hands: BTreeMap<PlayerId, Vec<Card>>,
    first_player: PlayerId,
    current_player: PlayerId,
    #[serde(with = "token_list")]
    eligible_cards: Vec<Card>,
    mode: GameMode,
    phase: Phase,
    player_teams: TeamAssignment,
    variant_nominations: Vec<VariantNomination>,
    poverty: Option<PovertyExchange>,
    announcements: Vec<Announcement>,
    tricks: Vec<Trick>,
    current_trick: Vec<Play>,
    score: TeamPoints,
    final_score: TeamPoints,
    winner: Option<Team>,
    #[serde(with = "time::serde::rfc3339")]
    start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    end_time: Option<OffsetDateTime>,
}

impl TryFrom<RoundFields> for Round {
    type Error = DomainError;

    fn try_from(f: RoundFields) -> Result<Self, Self::Error> {
        let round = Round {
            players: f.players,
            hands: f.hands,
            first_player: f.first_player,
            current_player: f.current_player,
            eligible_cards: f.eligible_cards,
            mode: f.mode,
            phase: f.phase,
            player_teams: f.player_teams,
            variant_nominations: f.variant_nominations,
            poverty: f.poverty,
            announcements: f.announcements,
            tricks: f.tricks,
            current_trick: f.current_trick,
            score: f.score,
            final_score: f.final_score,
            winner: f.winner,
            start_time: f.start_time,
            end_time: f.end_time,
        };
        round.check_consistency()?;
        Ok(round)
    }
}

impl Round {
    /// Structural checks for a round that did not come out of the transitions.
    fn check_consistency(&self) -> Result<(), DomainError> {
        let invalid = |what: &str| -> Result<(), DomainError> {
            Err(DomainError::InvariantViolation(format!("round: {what}")))
        };
        let ids = self.player_ids();
        ensure_distinct(&ids)?;

        if self.hands.len() != PLAYERS || ids.iter().any(|id| !self.hands.contains_key(id)) {
            return invalid("hands do not match the seated players");
        }
        if self.seat_of(self.first_player).is_none() || self.seat_of(self.current_player).is_none() {
            return invalid("first or current player is not seated");
        }
        let unassigned = ids
            .iter()
            .any(|&id| self.player_teams.team_of(id) == Team::Unknown);
        if !self.player_teams.is_finalized() || unassigned {
            return invalid("teams are not split two and two");
        }
        self.check_card_conservation()?;

        if self.tricks.len() > TRICKS_PER_ROUND || self.current_trick.len() >= PLAYERS {
            return invalid("too many tricks or plays");
        }
        if self.tricks.iter().any(|t| t.plays.len() != PLAYERS) {
            return invalid("a completed trick without four plays");
        }
        let leads_follow_winners = self
            .tricks
            .windows(2)
            .all(|pair| pair[1].leader() == Some(pair[0].winner));
        if !leads_follow_winners {
            return invalid("a trick not led by the previous winner");
        }

        let settled = self.poverty.as_ref().map_or(true, PovertyExchange::is_settled);
        let in_play = !self.tricks.is_empty() || !self.current_trick.is_empty();
        let consistent = match self.phase {
            Phase::Variant => {
                !in_play && self.variant_nominations.len() < PLAYERS && self.poverty.is_none()
            }
            Phase::Armut => !in_play && !settled,
            Phase::Playing => settled && self.tricks.len() < TRICKS_PER_ROUND,
            Phase::Complete => {
                settled && self.tricks.len() == TRICKS_PER_ROUND && self.current_trick.is_empty()
            }
        };
        if !consistent {
            return invalid("phase does not match the round's progress");
        }
        Ok(())
    }
}
