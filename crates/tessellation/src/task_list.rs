/// A stack of vertex indices that ignores pushes of values it already holds.
///
/// A value can be pushed again once it has been popped.
pub(crate) struct TaskList {
    stack: Vec<u32>,
    pending: Vec<bool>,
}

impl TaskList {
    pub fn new(capacity: usize) -> Self {
        TaskList {
            stack: Vec::new(),
            pending: vec![false; capacity],
        }
    }

    pub fn push(&mut self, value: u32) {
        let pending = &mut self.pending[value as usize];
        if *pending {
            return;
        }
        *pending = true;
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<u32> {
        let value = self.stack.pop()?;
        self.pending[value as usize] = false;
        Some(value)
    }
}

#[test]
fn task_list_dedup() {
    let mut tasks = TaskList::new(8);
    tasks.push(3);
    tasks.push(5);
    tasks.push(3);
    tasks.push(5);

    assert_eq!(tasks.pop(), Some(5));
    assert_eq!(tasks.pop(), Some(3));
    assert_eq!(tasks.pop(), None);

    // Popped values can come back.
    tasks.push(3);
    assert_eq!(tasks.pop(), Some(3));
}
