use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, HorizontalAlignment, Layout},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, Padding},
};
use wordgrid_engine::{
    GameSession, Letter, PlaceError, PlayerId, Position, SubmitError, TurnState, WordError,
};

use crate::{
    tui::{Runtime, Screen, ScreenTransition},
    view::widgets::{
        BoardDisplay, KeyBinding, KeyBindingDisplay, RackDisplay, ScoreboardDisplay, style,
    },
};

use super::SummarySlot;

const FALLBACK_MESSAGE: &str = "Failed to load dictionary. Using fallback list.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Move(Direction),
    Place(Letter),
    Submit,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Quit)
            }
            KeyCode::Up => Some(Self::Move(Direction::Up)),
            KeyCode::Down => Some(Self::Move(Direction::Down)),
            KeyCode::Left => Some(Self::Move(Direction::Left)),
            KeyCode::Right => Some(Self::Move(Direction::Right)),
            KeyCode::Char(c) => Letter::from_char(c).map(Self::Place),
            KeyCode::Enter => Some(Self::Submit),
            KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn bindings() -> &'static [KeyBinding<'static>] {
        &[
            (&["←", "↑", "→", "↓"], "Move"),
            (&["A-Z"], "Place"),
            (&["Enter"], "Submit"),
            (&["Esc"], "Quit"),
        ]
    }
}

/// The line shown under the board.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Status {
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Success(text) | Self::Error(text) => text,
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::Info(_) => style::INFO,
            Self::Success(_) => style::SUCCESS,
            Self::Error(_) => style::ERROR,
        }
    }
}

fn word_error_message(err: &WordError) -> String {
    match err {
        WordError::EmptyPlacement => "No tiles placed!".to_owned(),
        WordError::NonLinearPlacement => "Invalid: Tiles must be in a straight line!".to_owned(),
        WordError::GapInWord => "Invalid: Gaps in word!".to_owned(),
        WordError::UnknownWord { word } => format!("\"{word}\" is not a valid word!"),
    }
}

fn place_error_message(err: &PlaceError) -> String {
    match err {
        PlaceError::CellOccupied(_) => "That cell is already occupied!".to_owned(),
        PlaceError::LetterNotInRack(letter) => format!("No {letter} in your rack!"),
        PlaceError::GameOver => "The game is over.".to_owned(),
    }
}

/// The game itself: board, rack, scores and a cursor driven by the keyboard.
#[derive(Debug)]
pub(crate) struct PlayScreen {
    session: GameSession,
    cursor: Position,
    status: Status,
    summary: SummarySlot,
}

impl PlayScreen {
    pub(crate) fn new(session: GameSession, summary: SummarySlot, fallback: bool) -> Self {
        let mut this = Self {
            session,
            cursor: Position::CENTER,
            status: Status::Info(String::new()),
            summary,
        };
        this.status = if fallback {
            Status::Error(FALLBACK_MESSAGE.to_owned())
        } else {
            this.turn_status()
        };
        this
    }

    fn turn_status(&self) -> Status {
        match self.session.turn_state() {
            TurnState::AwaitingPlacement(id) => Status::Info(format!("{id}'s turn")),
            TurnState::GameOver(result) => Status::Success(format!("Game Over! {result}")),
        }
    }

    /// Whose rack is shown: the player to move, or the last to score once the game is over.
    fn rack_owner(&self) -> PlayerId {
        self.session
            .current_player()
            .or_else(|| self.session.history().last().map(|turn| turn.player))
            .unwrap_or(PlayerId::One)
    }

    fn move_cursor(&mut self, direction: Direction) {
        let next = match direction {
            Direction::Up => self.cursor.up(),
            Direction::Down => self.cursor.down(),
            Direction::Left => self.cursor.left(),
            Direction::Right => self.cursor.right(),
        };
        if let Some(next) = next {
            self.cursor = next;
        }
    }

    fn place(&mut self, letter: Letter) {
        self.status = match self.session.place(self.cursor, letter) {
            Ok(()) => Status::Info(format!("Placed {letter}. Enter to submit.")),
            Err(err) => Status::Error(place_error_message(&err)),
        };
    }

    fn submit(&mut self) {
        self.status = match self.session.submit() {
            Ok(outcome) => {
                let played = &outcome.played;
                let scored = format!(
                    "Valid word \"{}\"! +{} points",
                    played.word(),
                    played.score()
                );
                match outcome.result {
                    Some(result) => Status::Success(format!("{scored}. Game Over! {result}")),
                    None => Status::Success(scored),
                }
            }
            Err(SubmitError::Word(err)) => Status::Error(word_error_message(&err)),
            Err(SubmitError::GameOver) => Status::Error("The game is over.".to_owned()),
        };
    }
}

impl Screen for PlayScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(None);
    }

    fn on_close(&mut self, _runtime: &mut Runtime) {
        let summary = self.session.summary();
        match summary.result {
            Some(result) => log::info!("session closed: {result}"),
            None => log::info!(
                "session closed before game over, scores {:?}",
                summary.scores
            ),
        }
        *self.summary.borrow_mut() = Some(summary);
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        if let Some(event) = event.as_key_press_event()
            && let Some(action) = Action::from_key_event(&event)
        {
            match action {
                Action::Move(direction) => self.move_cursor(direction),
                Action::Place(letter) => self.place(letter),
                Action::Submit => self.submit(),
                Action::Quit => return ScreenTransition::Exit,
            }
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime) -> ScreenTransition {
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let owner = self.rack_owner();
        let mut board = BoardDisplay::new(self.session.board())
            .placed(self.session.player(owner).placed())
            .block(
                BlockWidget::bordered()
                    .title("WORDGRID")
                    .title_alignment(HorizontalAlignment::Center),
            );
        if self.session.current_player().is_some() {
            board = board.cursor(self.cursor);
        }
        let rack = RackDisplay::new(self.session.player(owner).rack())
            .block(BlockWidget::bordered().title(format!("{owner} RACK")));
        let scoreboard = ScoreboardDisplay::new(&self.session)
            .block(BlockWidget::bordered().padding(Padding::horizontal(1)));
        let status = Line::styled(self.status.text(), self.status.style()).centered();
        let help = KeyBindingDisplay::new(Action::bindings());

        let side_width = u16::max(rack.width(), scoreboard.width());
        let main_height = u16::max(board.height(), scoreboard.height() + rack.height());
        let viewport = frame.area().centered(
            Constraint::Length(board.width() + side_width),
            Constraint::Length(main_height + 2),
        );

        let [main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(main_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(viewport);
        let [board_area, side_area] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(side_width),
        ])
        .areas(main_area);
        let [scoreboard_area, rack_area] = Layout::vertical([
            Constraint::Length(scoreboard.height()),
            Constraint::Length(rack.height()),
        ])
        .areas(side_area);

        frame.render_widget(&board, board_area);
        frame.render_widget(scoreboard, scoreboard_area);
        frame.render_widget(rack, rack_area);
        frame.render_widget(status, status_area);
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Cell};
    use wordgrid_engine::{Board, Dictionary, GameState, Player, TileBag};

    use super::*;

    fn letters(s: &str) -> impl Iterator<Item = Letter> + '_ {
        s.chars().filter_map(Letter::from_char)
    }

    fn screen(rack_one: &str, rack_two: &str, bag: &str) -> PlayScreen {
        let players = [
            Player::with_rack(letters(rack_one).collect()),
            Player::with_rack(letters(rack_two).collect()),
        ];
        let state = GameState::from_parts(Board::EMPTY, TileBag::from_tiles(letters(bag)), players);
        let session = GameSession::from_state(Dictionary::from_words(["HAT", "DOG"]), state);
        PlayScreen::new(session, SummarySlot::default(), false)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Sends each character as a key press; `>` moves right, `v` moves down.
    fn type_keys(screen: &mut PlayScreen, keys: &str) {
        let mut runtime = Runtime::new();
        for c in keys.chars() {
            let code = match c {
                '>' => KeyCode::Right,
                'v' => KeyCode::Down,
                '\n' => KeyCode::Enter,
                c => KeyCode::Char(c),
            };
            let transition = screen.handle_event(&mut runtime, &key(code));
            assert!(transition.is_stay());
        }
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edge() {
        let mut screen = screen("HAT", "DOG", "");
        assert_eq!(screen.cursor, Position::CENTER);

        type_keys(&mut screen, ">v");
        assert_eq!(screen.cursor, Position::new(8, 8).unwrap());

        type_keys(&mut screen, &">".repeat(20));
        assert_eq!(screen.cursor, Position::new(8, 14).unwrap());
    }

    #[test]
    fn test_place_and_submit_word() {
        let mut screen = screen("HATXYZQ", "DOGBCEF", "IJKLMNO");
        assert_eq!(screen.status, Status::Info("Player 1's turn".to_owned()));

        type_keys(&mut screen, "h>a>t\n");

        assert_eq!(
            screen.status,
            Status::Success("Valid word \"HAT\"! +6 points".to_owned())
        );
        assert_eq!(screen.session.player(PlayerId::One).score(), 6);
        assert_eq!(screen.session.current_player(), Some(PlayerId::Two));
        assert_eq!(screen.session.board().letter_count(), 3);
    }

    #[test]
    fn test_rejected_submissions_show_messages() {
        let mut screen = screen("TAHXYZQ", "DOGBCEF", "");

        type_keys(&mut screen, "\n");
        assert_eq!(screen.status, Status::Error("No tiles placed!".to_owned()));

        type_keys(&mut screen, "t>>h\n");
        assert_eq!(
            screen.status,
            Status::Error("Invalid: Gaps in word!".to_owned())
        );

        type_keys(&mut screen, "v>x\n");
        assert_eq!(
            screen.status,
            Status::Error("Invalid: Tiles must be in a straight line!".to_owned())
        );
    }

    #[test]
    fn test_unknown_word_keeps_turn() {
        let mut screen = screen("TAHXYZQ", "DOGBCEF", "");

        type_keys(&mut screen, "t>a>h\n");

        assert_eq!(
            screen.status,
            Status::Error("\"TAH\" is not a valid word!".to_owned())
        );
        assert_eq!(screen.session.current_player(), Some(PlayerId::One));
        assert_eq!(screen.session.player(PlayerId::One).score(), 0);
    }

    #[test]
    fn test_place_errors() {
        let mut screen = screen("HAT", "DOG", "");

        type_keys(&mut screen, "z");
        assert_eq!(
            screen.status,
            Status::Error("No Z in your rack!".to_owned())
        );

        type_keys(&mut screen, "ha");
        assert_eq!(
            screen.status,
            Status::Error("That cell is already occupied!".to_owned())
        );
        assert_eq!(screen.session.player(PlayerId::One).rack().len(), 2);
    }

    #[test]
    fn test_game_over_message() {
        let mut screen = screen("HAT", "DOGX", "");

        type_keys(&mut screen, "h>a>t\n");

        assert_eq!(
            screen.status,
            Status::Success(
                "Valid word \"HAT\"! +6 points. Game Over! Player 1 wins with 6 points!".to_owned()
            )
        );
        assert_eq!(screen.rack_owner(), PlayerId::One);

        type_keys(&mut screen, "d");
        assert_eq!(screen.status, Status::Error("The game is over.".to_owned()));
    }

    #[test]
    fn test_quit_stores_summary() {
        let mut screen = screen("HAT", "DOGX", "");
        let summary = screen.summary.clone();
        let mut runtime = Runtime::new();

        let transition = screen.handle_event(&mut runtime, &key(KeyCode::Esc));
        assert!(transition.is_exit());
        assert!(summary.borrow().is_none());

        screen.on_close(&mut runtime);
        let summary = summary.take().unwrap();
        assert_eq!(summary.scores, [0, 0]);
        assert!(summary.result.is_none());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut screen = screen("CAT", "DOG", "");
        let mut runtime = Runtime::new();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(screen.handle_event(&mut runtime, &ctrl_c).is_exit());
        assert_eq!(screen.session.player(PlayerId::One).rack().len(), 3);
    }

    #[test]
    fn test_fallback_message() {
        let session = GameSession::new(Dictionary::fallback());
        let screen = PlayScreen::new(session, SummarySlot::default(), true);
        assert_eq!(screen.status, Status::Error(FALLBACK_MESSAGE.to_owned()));
    }

    #[test]
    fn test_draw() {
        let mut screen = screen("HATXYZQ", "DOGBCEF", "IJKLMNO");
        type_keys(&mut screen, "h>a>t\n");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| screen.draw(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(Cell::symbol)
            .collect();
        assert!(text.contains("WORDGRID"));
        assert!(text.contains("PLAYER 1:"));
        assert!(text.contains("Player 2 RACK"));
        assert!(text.contains("P1 HAT +6"));
        assert!(text.contains("Valid word \"HAT\"! +6 points"));
    }
}
