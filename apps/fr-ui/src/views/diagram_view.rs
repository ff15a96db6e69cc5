use egui::Color32;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};
use fr_binary::McCabeThieleDiagram;

#[derive(Default)]
pub struct DiagramView {
    hide_stage_labels: bool,
}

fn line(points: &[[f64; 2]], name: &str, color: Color32) -> Line {
    let plot_points: PlotPoints = points.to_vec().into();
    Line::new(plot_points).name(name).color(color)
}

impl DiagramView {
    pub fn show(&mut self, ui: &mut egui::Ui, diagram: &McCabeThieleDiagram) {
        ui.horizontal(|ui| {
            ui.heading(&diagram.title);
            ui.checkbox(&mut self.hide_stage_labels, "Hide stage numbers");
        });
        ui.separator();

        let (markers, stages): (Vec<_>, Vec<_>) = diagram
            .markers
            .iter()
            .partition(|m| m.label.parse::<u32>().is_err());
        let show_stage_labels = !self.hide_stage_labels;

        Plot::new("mccabe_thiele")
            .legend(Legend::default())
            .data_aspect(1.0)
            .include_x(0.0)
            .include_x(1.0)
            .include_y(0.0)
            .include_y(1.0)
            .x_axis_label("x (liquid mole fraction)")
            .y_axis_label("y (vapor mole fraction)")
            .show(ui, |plot_ui| {
                plot_ui.line(line(&diagram.equilibrium, "Equilibrium", Color32::LIGHT_BLUE).width(2.0));
                plot_ui.line(
                    line(&diagram.diagonal, "y = x", Color32::GRAY).style(LineStyle::dashed_loose()),
                );
                plot_ui.line(line(&diagram.rectifying, "Rectifying", Color32::LIGHT_GREEN));
                plot_ui.line(line(&diagram.stripping, "Stripping", Color32::GOLD));
                plot_ui.line(line(&diagram.q_line, "q-line", Color32::LIGHT_RED));
                plot_ui.line(line(&diagram.staircase, "Stages", Color32::WHITE));

                for m in &markers {
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![m.point]))
                            .radius(4.0)
                            .name(&m.label),
                    );
                    plot_ui.text(Text::new(
                        PlotPoint::new(m.point[0] + 0.02, m.point[1] - 0.02),
                        m.label.as_str(),
                    ));
                }
                if show_stage_labels {
                    for s in &stages {
                        plot_ui.text(
                            Text::new(PlotPoint::new(s.point[0] - 0.015, s.point[1] + 0.015), s.label.as_str())
                                .color(Color32::YELLOW),
                        );
                    }
                }
            });
    }
}
