// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Button-Tasks melden Release-Flanken über die LedButton-Listener an den
// Game-Task (PlayerTurn + Signal), nie über blockierende Aufrufe.

pub mod button;
pub mod game;

// Re-export Tasks für einfachen Import
pub use button::button_task;
pub use game::game_task;
