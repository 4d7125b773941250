use std::cell::RefCell;

/// Page access needed by the mood selector.
///
/// Options are addressed by their position in document order.
pub trait MoodBoard {
    fn option_count(&self) -> usize;

    /// Score attribute of one option, `None` when the option carries none.
    fn option_score(&self, index: usize) -> Option<String>;

    fn set_marked(&self, index: usize, marked: bool);

    /// Writes the hidden form field read by the mood entry form.
    fn write_score(&self, score: &str);
}

/// The option most recently applied to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSelection {
    pub index: usize,
    pub score: String,
}

pub struct MoodSelector<B> {
    board: B,
    selected: RefCell<Option<MoodSelection>>,
}

impl<B: MoodBoard> MoodSelector<B> {
    pub fn new(board: B) -> Self {
        Self {
            board,
            selected: RefCell::new(None),
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn selected(&self) -> Option<MoodSelection> {
        self.selected.borrow().clone()
    }

    /// Marks `index` as the only selected option and copies its score into the form field.
    ///
    /// Every option is unmarked first, so the board holds exactly one marker afterwards.
    pub fn select(&self, index: usize) -> Option<MoodSelection> {
        let count = self.board.option_count();
        if index >= count {
            tracing::debug!(index, count, "ignoring selection of unknown mood option");
            return None;
        }

        for option in 0..count {
            self.board.set_marked(option, false);
        }
        self.board.set_marked(index, true);

        let score = self.board.option_score(index).unwrap_or_default();
        self.board.write_score(&score);

        let selection = MoodSelection { index, score };
        tracing::debug!(index, score = %selection.score, "mood option selected");
        *self.selected.borrow_mut() = Some(selection.clone());
        Some(selection)
    }
}
