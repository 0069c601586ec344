use snake_engine::snake::{Board, Cell};

pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity((board.width() + 1) * board.height());
    for row in board.rows() {
        out.extend(row.iter().map(|cell| match cell {
            Cell::Empty => '.',
            Cell::SnakeSegment(1) => '@',
            Cell::SnakeSegment(_) => 'o',
            Cell::Food => '*',
        }));
        out.push('\n');
    }
    out
}
