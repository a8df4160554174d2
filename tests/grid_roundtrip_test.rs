use delim_edit::data::grid::Grid;
use delim_edit::data::grid_loader::GridLoader;
use delim_edit::data::serializer::GridSerializer;
use std::fs;

fn cells(grid: &Grid) -> Vec<Vec<String>> {
    (0..grid.nrows())
        .map(|y| {
            grid.row(y)
                .unwrap()
                .into_iter()
                .map(String::from)
                .collect()
        })
        .collect()
}

#[test]
fn test_save_then_load_reproduces_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "name,age,city\nalice,30,paris\nbob,25,rome\n").unwrap();

    let grid = GridLoader::load_file(&path, ',').unwrap();
    grid.save().unwrap();
    let reloaded = GridLoader::load_file(&path, ',').unwrap();

    assert_eq!(cells(&reloaded), cells(&grid));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "name,age,city\nalice,30,paris\nbob,25,rome\n"
    );
}

#[test]
fn test_trailing_empty_field_is_lost_on_reload() {
    let mut grid = Grid::from_rows(vec![vec!["a", "b"], vec!["c", "d"]]);
    grid.set_cell(1, 1, "");

    let text = GridSerializer::to_string(&grid);
    assert_eq!(text, "a,b\nc,\n");

    // The second row now parses to a single field; the grid still has two
    // columns because the first row has two, so the cell reads back empty.
    let reloaded = GridLoader::load_str(&text, ',').unwrap();
    assert_eq!(reloaded.ncols(), 2);
    assert_eq!(reloaded.get_cell(1, 1), Some(""));

    // With every row ending empty the column disappears entirely
    let mut single = Grid::from_rows(vec![vec!["x", "y"]]);
    single.set_cell(1, 0, "");
    let reloaded = GridLoader::load_str(&GridSerializer::to_string(&single), ',').unwrap();
    assert_eq!(reloaded.ncols(), 1);
}

#[test]
fn test_add_column_then_save_gives_every_row_an_empty_field() {
    let mut grid = GridLoader::load_str("a,b\n1,2\n", ',').unwrap();
    grid.add_column();
    grid.set_cell(2, 0, "c");
    assert_eq!(GridSerializer::to_string(&grid), "a,b,c\n1,2,\n");
}

#[test]
fn test_edits_are_persisted_with_tab_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.tsv");
    fs::write(&path, "team\tscore\nred\t1\n").unwrap();

    let mut grid = GridLoader::load_file(&path, '\t').unwrap();
    grid.set_selection(1, 1);
    grid.set_selected_cell("42");
    grid.move_to_next_cell();
    grid.move_to_next_cell();
    grid.set_selected_cell("blue");
    grid.save().unwrap();

    // Tab past the last cell appended a row
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "team\tscore\nred\t42\n\tblue\n"
    );
}

#[test]
fn test_quoted_fields_survive_round_trip() {
    let text = "\"x,y\",z\n";
    let grid = GridLoader::load_str(text, ',').unwrap();
    assert_eq!(grid.get_cell(0, 0), Some("\"x,y\""));
    assert_eq!(GridSerializer::to_string(&grid), text);
}
