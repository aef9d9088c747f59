use rubiks::{Move, TurnCompleted};

#[derive(Debug, Clone)]
pub enum SimEvent {
    MoveQueued { mv: Move },
    TurnCompleted { turn: TurnCompleted },
    Paused { paused: bool },
    Finished { tick: u64 },
    Error { message: String },
}

impl SimEvent {
    pub fn describe(&self) -> String {
        match self {
            SimEvent::MoveQueued { mv } => format!("Queued move {} ({})", mv.index(), mv.as_str()),
            SimEvent::TurnCompleted { turn } => format!(
                "Tick {}: {} done, relabeled {} face {:?}",
                turn.tick,
                turn.mv.as_str(),
                turn.face.as_str(),
                turn.direction
            ),
            SimEvent::Paused { paused: true } => "Paused".to_string(),
            SimEvent::Paused { paused: false } => "Resumed".to_string(),
            SimEvent::Finished { tick } => format!("Script finished at tick {}", tick),
            SimEvent::Error { message } => message.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SimEvent::Error { .. })
    }
}
