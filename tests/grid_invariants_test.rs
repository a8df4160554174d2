use delim_edit::data::grid::Grid;
use delim_edit::data::grid_loader::GridLoader;
use delim_edit::ui::viewport_manager::ViewportManager;

/// Small linear congruential generator so the operation sequence is fixed
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

fn apply(grid: &mut Grid, op: usize, step: usize) {
    let (xsel, ysel) = grid.selection();
    match op {
        0 => grid.add_column(),
        1 => grid.add_row(),
        2 => grid.delete_column(xsel),
        3 => grid.delete_row(ysel),
        4 => grid.move_to_next_cell(),
        5 => grid.move_to_line_start(),
        6 => grid.move_to_line_end(),
        7 => grid.move_left(),
        8 => grid.move_right(),
        9 => grid.move_up(),
        10 => grid.move_down(),
        11 => grid.set_selected_cell(format!("v{}", step)),
        12 => {
            grid.toggle_titles();
        }
        _ => grid.set_selection(xsel + 3, ysel + 7),
    }
}

fn assert_shape(grid: &Grid, step: usize) {
    let (xsel, ysel) = grid.selection();
    assert!(grid.ncols() >= 1 && grid.nrows() >= 1, "step {}", step);
    assert!(xsel < grid.ncols(), "step {}: xsel {} of {}", step, xsel, grid.ncols());
    assert!(ysel < grid.nrows(), "step {}: ysel {} of {}", step, ysel, grid.nrows());
    for (x, column) in grid.columns().iter().enumerate() {
        assert_eq!(column.len(), grid.nrows(), "step {}: column {}", step, x);
    }
}

#[test]
fn test_mixed_operations_keep_grid_consistent() {
    let mut grid = GridLoader::load_str("a,b,c\n1,2,3\n4,5,6\n", ',').unwrap();
    let viewport = ViewportManager::new(12, 6);
    let mut rng = Lcg(0x5eed);

    for step in 0..5000 {
        let op = rng.next(14);
        apply(&mut grid, op, step);
        assert_shape(&grid, step);

        viewport.update_scroll(&mut grid);
        let (xsel, ysel) = grid.selection();
        let (xoffset, yoffset) = grid.offset();
        assert!(xoffset <= xsel, "step {}: xoffset {} > xsel {}", step, xoffset, xsel);
        assert!(yoffset <= ysel, "step {}: yoffset {} > ysel {}", step, yoffset, ysel);
        if ysel != 0 {
            assert!(
                viewport.visible_rows(&grid).contains(&ysel),
                "step {}: row {} not drawn",
                step,
                ysel
            );
        }
    }
}

#[test]
fn test_deletes_down_to_single_cell_and_back() {
    let mut grid = GridLoader::load_str("a,b,c\n1,2,3\n", ',').unwrap();
    let viewport = ViewportManager::new(20, 8);
    grid.move_to_line_end();
    grid.move_down();

    for step in 0..10 {
        let (xsel, ysel) = grid.selection();
        grid.delete_column(xsel);
        grid.delete_row(ysel);
        assert_shape(&grid, step);
        viewport.update_scroll(&mut grid);
        assert_eq!(grid.offset(), (0, 0));
    }
    assert_eq!((grid.ncols(), grid.nrows()), (1, 1));

    for step in 0..10 {
        grid.move_to_next_cell();
        assert_shape(&grid, step);
    }
    assert_eq!((grid.ncols(), grid.nrows()), (1, 11));
    assert_eq!(grid.selection(), (0, 10));
}
