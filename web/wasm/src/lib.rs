use handrs::{
    Card, Evaluation, Game, GameOptions, GameState, HandCard, PlayOutcome, PlayResult,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.game.start().map_err(js_err)
    }

    pub fn toggle(&mut self, index: u32) -> Result<bool, JsValue> {
        self.game.toggle(index as usize).map_err(js_err)
    }

    pub fn clear_selection(&mut self) -> Result<(), JsValue> {
        self.game.clear_selection().map_err(js_err)
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn play_hand(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.play_hand().map_err(js_err)?;
        to_js_value(&JsPlayResult::from(result))
    }

    pub fn discard(&mut self) -> Result<u32, JsValue> {
        self.game
            .discard()
            .map(|cards| cards.len() as u32)
            .map_err(js_err)
    }

    pub fn next_level(&mut self) -> Result<(), JsValue> {
        self.game.next_level().map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            level: self.game.level() as u32,
            level_score: self.game.level_score(),
            total_score: self.game.total_score(),
            required_score: self.game.required_score(),
            hands_left: self.game.hands_left() as u32,
            discards_left: self.game.discards_left() as u32,
            cards: self
                .game
                .hand()
                .cards()
                .iter()
                .copied()
                .map(JsHandCard::from)
                .collect(),
            evaluation: JsEvaluation::from(self.game.evaluate()),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    level: u32,
    level_score: u32,
    total_score: u32,
    required_score: u32,
    hands_left: u32,
    discards_left: u32,
    cards: Vec<JsHandCard>,
    evaluation: JsEvaluation,
}

#[derive(Serialize)]
struct JsCard {
    name: String,
    suit: &'static str,
    rank: &'static str,
    value: u8,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            name: card.to_string(),
            suit: card.suit.name(),
            rank: card.rank.symbol(),
            value: card.value(),
        }
    }
}

#[derive(Serialize)]
struct JsHandCard {
    card: JsCard,
    selected: bool,
}

impl From<HandCard> for JsHandCard {
    fn from(hand_card: HandCard) -> Self {
        Self {
            card: JsCard::from(hand_card.card),
            selected: hand_card.selected,
        }
    }
}

#[derive(Serialize)]
struct JsEvaluation {
    category: &'static str,
    value_sum: u32,
    score: u32,
}

impl From<Evaluation> for JsEvaluation {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            category: evaluation.category.name(),
            value_sum: evaluation.value_sum,
            score: evaluation.score,
        }
    }
}

#[derive(Serialize)]
struct JsPlayResult {
    played: Vec<JsCard>,
    evaluation: JsEvaluation,
    level_score: u32,
    total_score: u32,
    required_score: u32,
    hands_played: u32,
    outcome: &'static str,
}

impl From<PlayResult> for JsPlayResult {
    fn from(result: PlayResult) -> Self {
        Self {
            played: result.played.into_iter().map(JsCard::from).collect(),
            evaluation: JsEvaluation::from(result.evaluation),
            level_score: result.level_score,
            total_score: result.total_score,
            required_score: result.required_score,
            hands_played: result.hands_played as u32,
            outcome: outcome_to_str(result.outcome),
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::Playing => "Playing",
        GameState::LevelCleared => "LevelCleared",
        GameState::Won => "Won",
        GameState::Lost => "Lost",
    }
}

fn outcome_to_str(outcome: PlayOutcome) -> &'static str {
    match outcome {
        PlayOutcome::Continue => "Continue",
        PlayOutcome::LevelCleared => "LevelCleared",
        PlayOutcome::Won => "Won",
        PlayOutcome::Lost => "Lost",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
