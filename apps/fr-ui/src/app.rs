use crate::views::diagram_view::DiagramView;
use fr_app::{BinaryOverrides, BinaryRun, case_service, run_service};
use fr_project::{CaseFile, RefluxDef};
use fr_props::PropertyTable;
use std::path::PathBuf;

pub struct FractionateApp {
    table: PropertyTable,
    case_path: String,
    case: Option<CaseFile>,
    /// Reflux ratio typed into the side panel, applied on recompute
    reflux_ratio: f64,
    use_case_reflux: bool,
    run: Option<BinaryRun>,
    error: Option<String>,
    diagram_view: DiagramView,
}

impl FractionateApp {
    pub fn new(case_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            table: PropertyTable::builtin(),
            case_path: case_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            case: None,
            reflux_ratio: 3.5,
            use_case_reflux: true,
            run: None,
            error: None,
            diagram_view: DiagramView::default(),
        };
        if case_path.is_some() {
            app.load_case();
        }
        app
    }

    fn load_case(&mut self) {
        self.run = None;
        match case_service::load_case(std::path::Path::new(self.case_path.trim())) {
            Ok(case) => {
                if let Ok(def) = run_service::binary_case(&case) {
                    if let RefluxDef { ratio: Some(r), .. } = def.reflux {
                        self.reflux_ratio = r;
                    }
                }
                self.case = Some(case);
                self.use_case_reflux = true;
                self.recompute();
            }
            Err(e) => {
                self.case = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn recompute(&mut self) {
        let Some(case) = &self.case else {
            return;
        };
        let overrides = BinaryOverrides {
            reflux_ratio: (!self.use_case_reflux).then_some(self.reflux_ratio),
        };
        match run_service::run_binary(case, overrides, &self.table) {
            Ok(run) => {
                self.run = Some(run);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "binary design failed");
                self.run = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn show_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Case");
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.case_path);
            if ui.button("Load").clicked() {
                self.load_case();
            }
        });
        if let Some(case) = &self.case {
            ui.label(&case.name);
            if let Some(desc) = &case.description {
                ui.small(desc);
            }
        }

        ui.separator();
        ui.heading("Reflux");
        let mut changed = ui
            .checkbox(&mut self.use_case_reflux, "Use case reflux")
            .changed();
        ui.add_enabled_ui(!self.use_case_reflux, |ui| {
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.reflux_ratio)
                        .speed(0.05)
                        .range(0.0..=50.0)
                        .prefix("R = "),
                )
                .changed();
        });
        if changed {
            self.recompute();
        }

        ui.separator();
        if let Some(run) = &self.run {
            let d = &run.design;
            let c = d.lines.compositions;
            egui::Grid::new("design_summary").striped(true).show(ui, |ui| {
                let mut row = |label: &str, value: String| {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                };
                row("xF", format!("{:.4}", c.x_f));
                row("xD", format!("{:.4}", c.x_d));
                row("xB", format!("{:.4}", c.x_b));
                row("Rmin", format!("{:.4}", d.minimum_reflux));
                row("R", format!("{:.4}", d.lines.reflux_ratio));
                row("Ideal stages", d.stepping.ideal_stages.to_string());
                row(
                    "Feed stage",
                    d.stepping
                        .feed_stage
                        .map_or_else(|| "-".to_string(), |f| f.to_string()),
                );
                row("Top T [K]", format!("{:.2}", d.temperatures.top_k));
                row("Bottom T [K]", format!("{:.2}", d.temperatures.bottom_k));
            });
        }

        if let Some(err) = &self.error {
            ui.separator();
            ui.colored_label(egui::Color32::RED, err);
        }
    }
}

impl eframe::App for FractionateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("case_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.show_side_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| match &self.run {
            Some(run) => self.diagram_view.show(ui, &run.diagram),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Load a binary case file to draw its McCabe-Thiele diagram");
                });
            }
        });
    }
}
