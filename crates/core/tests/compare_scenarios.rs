use statradar_core::{
    render_svg, ChartConfig, CompareError, CompareForm, DatasetStore, RadarChart, Stat,
    SvgSurface,
};

const DATASET: &str = include_str!("../../../data/pokemon.json");

fn store() -> DatasetStore {
    DatasetStore::from_json(DATASET).unwrap()
}

fn form_with(store: &DatasetStore, names: &[&str]) -> CompareForm {
    let mut form = CompareForm::new();
    for (index, name) in names.iter().enumerate() {
        form.set_text(store, index, name);
    }
    form
}

#[test]
fn bundled_dataset_loads() {
    let store = store();

    assert!(store.len() > 20);
    let pikachu = store.resolve("PIKACHU").unwrap();
    assert_eq!(pikachu.values(), [35, 55, 40, 50, 50, 90]);
}

#[test]
fn char_prefix_suggests_in_dataset_order() {
    let store = store();
    let mut form = CompareForm::new();

    for ch in "char".chars() {
        form.insert_char(&store, ch);
    }

    assert_eq!(
        form.focused().suggestions(),
        ["Charmander", "Charmeleon", "Charizard"]
    );
    assert!(form.focused().suggestions().iter().all(|name| name != "Squirtle"));
}

#[test]
fn two_subjects_render_two_polygons_and_legend_rows() {
    let store = store();
    let mut form = form_with(&store, &["Pikachu", "Bulbasaur"]);

    let chart = form.submit(&store, &ChartConfig::default()).unwrap();
    let svg = render_svg(&chart);

    assert_eq!(chart.datasets.len(), 2);
    assert_eq!(chart.legend.len(), 2);
    assert_eq!(svg.matches("class='area'").count(), 2);
    assert_eq!(svg.matches("<title>").count(), 12);
}

#[test]
fn three_subjects_render_three_polygons_and_legend_rows() {
    let store = store();
    let mut form = form_with(&store, &["Pikachu", "Bulbasaur", "Charmander"]);

    let chart = form.submit(&store, &ChartConfig::default()).unwrap();

    assert_eq!(chart.datasets.len(), 3);
    assert_eq!(
        chart.legend.iter().map(|entry| entry.name.as_str()).collect::<Vec<_>>(),
        ["Pikachu", "Bulbasaur", "Charmander"]
    );
    assert_eq!(render_svg(&chart).matches("<title>").count(), 18);
}

#[test]
fn unknown_first_subject_renders_nothing() {
    let store = store();
    let mut form = form_with(&store, &["Missingno", "Bulbasaur"]);
    let mut surface = SvgSurface::new();

    match form.submit(&store, &ChartConfig::default()) {
        Ok(chart) => surface.render(&chart),
        Err(error) => {
            assert!(matches!(error, CompareError::NotFound(ref unknown) if unknown[0].name == "Missingno"));
            assert!(error.to_string().contains("Missingno"));
        }
    }

    assert!(surface.document().is_empty());
}

#[test]
fn repeated_renders_never_accumulate() {
    let store = store();
    let mut surface = SvgSurface::new();

    for names in [["Pikachu", "Mew", "Onix"], ["Snorlax", "Eevee", ""]] {
        let mut form = form_with(&store, &names);
        let chart = form.submit(&store, &ChartConfig::default()).unwrap();
        surface.render(&chart);
    }

    assert_eq!(surface.document().matches("<svg").count(), 1);
    assert_eq!(surface.document().matches("class='area'").count(), 2);
}

#[test]
fn stats_above_max_reach_past_outer_ring() {
    let store = store();
    let mut form = form_with(&store, &["Blissey", "Chansey"]);

    let chart: RadarChart = form.submit(&store, &ChartConfig::default()).unwrap();
    let hp = chart.datasets[0].points[Stat::Hp.index()];

    assert_eq!(hp.value, 255);
    assert!(hp.x > chart.config.radius());
}
