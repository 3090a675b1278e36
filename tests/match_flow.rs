use match_charts::charts::{ChartCanvas, Orientation, PlotBackend};
use match_charts::data::{DataLoader, DataProcessor, Grouping};
use match_charts::stats::StatsCalculator;
use match_charts::view::{Container, Panel, View, ViewController, ViewError};
use std::io::Write;

const MATCH_CSV: &str = "\
player,team,side,champion,result,kills,deaths,assists,minion_kills,monster_kills,total_gold,damage_to_champions,vision_score
BrokenBlade,G2,Blue,Rumble,true,3,1,7,260,12,13200,21000,28
SkewMond,G2,Blue,Maokai,true,1,2,12,30,170,10100,9000,45
Caps,G2,Blue,Ahri,true,6,0,5,280,8,14800,25000,31
Canna,MKOI,Red,Gragas,false,1,4,2,230,4,10400,12000,22
Elyoya,MKOI,Red,Vi,false,2,3,3,35,160,9600,8000,52
";

fn write_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(MATCH_CSV.as_bytes()).unwrap();
    file
}

#[test]
fn csv_to_chart_view() {
    let file = write_csv();
    let df = DataLoader::read_csv(file.path()).unwrap();
    let lines = DataProcessor::player_lines(&df).unwrap();
    assert_eq!(lines.len(), 5);

    let table = DataProcessor::build_table(&lines, Grouping::Player).unwrap();
    let mut controller = ViewController::new(
        Panel::new("cards"),
        Panel::new("chart"),
        PlotBackend::new(),
        ChartCanvas::new("stats_chart"),
        table,
    );

    controller.show_view(View::Cards).unwrap();
    assert!(controller.chart().is_none());

    controller.show_view(View::Chart).unwrap();
    let chart = controller.chart().expect("chart rendered on first chart view");
    let spec = chart.spec();
    assert_eq!(spec.orientation, Orientation::Horizontal);
    assert_eq!(spec.value_axis.title.as_deref(), Some("Gold"));
    assert_eq!(spec.labels[2], "Caps");
    assert_eq!(spec.datasets[0].values[2], 14800.0);
    let first_plot = chart.plot_id().to_string();

    controller.show_view(View::Cards).unwrap();
    controller.show_view(View::Chart).unwrap();
    assert_eq!(controller.chart().unwrap().plot_id(), first_plot);

    controller.render_chart("cs").unwrap();
    let chart = controller.chart().unwrap();
    assert_ne!(chart.plot_id(), first_plot);
    assert_eq!(chart.spec().value_axis.title.as_deref(), Some("CS"));
    assert_eq!(chart.spec().datasets[0].values[1], 200.0);
}

#[test]
fn team_table_and_cards() {
    let file = write_csv();
    let df = DataLoader::read_csv(file.path()).unwrap();
    let lines = DataProcessor::player_lines(&df).unwrap();

    let table = DataProcessor::build_table(&lines, Grouping::Team).unwrap();
    assert_eq!(table.labels(), ["G2".to_string(), "MKOI".to_string()]);
    assert_eq!(table.get("kills").unwrap().values, vec![10.0, 3.0]);

    let cards = StatsCalculator::cards(&DataProcessor::aggregate(&lines, Grouping::Team));
    assert!(cards[0].win);
    assert!(!cards[1].win);
    assert_eq!(cards[0].kda, (10.0 + 24.0) / 3.0);

    let player_cards = StatsCalculator::cards(&lines);
    let caps = player_cards.iter().find(|c| c.name == "Caps").unwrap();
    assert_eq!(caps.kda, 0.0);
}

#[test]
fn chart_view_before_data_renders_once_data_arrives() {
    let mut controller = ViewController::new(
        Panel::new("cards"),
        Panel::new("chart"),
        PlotBackend::new(),
        ChartCanvas::new("stats_chart"),
        Default::default(),
    );

    controller.show_view(View::Chart).unwrap();
    assert!(controller.chart_panel().is_visible());
    assert!(controller.chart().is_none());
    assert!(!controller.is_chart_loaded());

    let err = controller.render_chart("gold").unwrap_err();
    assert!(matches!(err, ViewError::UnknownKind(ref k) if k == "gold"));

    let file = write_csv();
    let df = DataLoader::read_csv(file.path()).unwrap();
    let lines = DataProcessor::player_lines(&df).unwrap();
    controller
        .set_table(DataProcessor::build_table(&lines, Grouping::Player).unwrap())
        .unwrap();

    let chart = controller.chart().expect("chart rendered when data arrives");
    assert_eq!(chart.spec().value_axis.title.as_deref(), Some("Gold"));
}
