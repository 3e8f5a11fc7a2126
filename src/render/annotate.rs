//! Everything drawn around the curve bars: track names, tops, the striplog
//! track, KB/TD notes, the well header and depth-proportional sizing.

use super::{RenderError, ScorecardRenderer};
use crate::config::defaults;
use crate::figure::{Coords, Figure, HAlign, HLine, Panel, Spines, Text, VAlign};
use crate::striplog::{StriplogRender, StriplogStyle};
use crate::types::{Top, WellHeader, WellLocation};

impl ScorecardRenderer {
    /// Caption every track except the striplog track with its title.
    pub fn put_track_names(&self, panels: &mut [Panel]) {
        let count = panels.len().saturating_sub(1);
        for (track, panel) in panels.iter_mut().take(count).enumerate() {
            let title = self.config.track_title(track);
            if title.is_empty() {
                continue;
            }
            panel.caption = Some(
                Text::new(0.5, 0.0, title, self.config.layout.title_font_size)
                    .align(HAlign::Center, VAlign::Bottom)
                    .in_coords(Coords::Axes),
            );
        }
    }

    /// Draw each top as a horizontal line across every panel, labelled with
    /// its formation name on the rightmost panel only.
    ///
    /// Also fixes the shared depth range to `[td, 0]` and hides ticks that
    /// would otherwise repeat on every track.
    pub fn draw_tops(&self, panels: &mut [Panel], tops: &[Top], td: Option<f64>) {
        let style = &self.config.tops;
        let last = panels.len().saturating_sub(1);

        for (i, panel) in panels.iter_mut().enumerate() {
            if let Some(td) = td {
                panel.ylim = Some((td, 0.0));
            }
            panel.show_xticks = false;
            if i > 0 {
                panel.show_yticks = false;
            }

            for top in tops {
                panel.hline(HLine {
                    y: top.depth,
                    line_width: style.line_width,
                    color: style.color,
                    xmax: style.xmax,
                    shadow: style.shadow,
                });
                if i == last {
                    let x = panel.xlim.1 * style.label_offset;
                    panel.text(
                        Text::new(x, top.depth, top.formation.as_str(), style.label_font_size)
                            .align(HAlign::Left, VAlign::Center),
                    );
                }
            }
        }
    }

    /// Render `striplog` into the lithology track, matching only the
    /// configured component property.
    pub fn draw_striplog(
        &self,
        panel: &mut Panel,
        striplog: &dyn StriplogRender,
        td: Option<f64>,
    ) -> Result<(), RenderError> {
        let config = &self.config.striplog;
        let style = StriplogStyle {
            legend: &config.legend,
            match_property: &config.match_property,
            aspect: config.aspect,
        };
        striplog.render(panel, &style)?;

        let title = self.config.track_title(defaults::STRIPLOG_TRACK);
        if !title.is_empty() {
            panel.title = Some(title.to_string());
        }
        if let Some(td) = td {
            panel.ylim = Some((td, 0.0));
        }
        panel.show_ytick_labels = false;
        panel.spines = Spines::default();
        Ok(())
    }

    /// KB elevation and total depth, set off to the right of `panel`.
    pub fn put_side_text(&self, panel: &mut Panel, location: &WellLocation, td: Option<f64>) {
        if let Some(kb) = location.kb {
            panel.text(
                Text::new(1.4, 1.0, format!("KB elev.: {kb} m"), defaults::SIDE_TEXT_FONT_SIZE)
                    .align(HAlign::Left, VAlign::Top)
                    .in_coords(Coords::Axes),
            );
        }
        if let Some(td) = td {
            panel.text(
                Text::new(
                    1.4,
                    0.0,
                    format!("TD: {} m", td.round()),
                    defaults::SIDE_TEXT_FONT_SIZE,
                )
                .align(HAlign::Left, VAlign::Bottom)
                .in_coords(Coords::Axes),
            );
        }
    }

    /// Well name and UWI above the tracks; tracks are packed edge to edge.
    pub fn put_header_text(&self, figure: &mut Figure, header: &WellHeader) {
        figure.text(Text::new(
            0.05,
            0.925,
            header.name.as_str(),
            defaults::HEADER_NAME_FONT_SIZE,
        ));
        figure.text(Text::new(
            0.05,
            0.910,
            format!("UWI: {}", header.uwi),
            defaults::HEADER_UWI_FONT_SIZE,
        ));
        figure.wspace = 0.0;
    }

    /// Scale figure height to total depth at the configured metres per inch.
    pub fn adjust_fig_dims(&self, figure: &mut Figure, td: Option<f64>) {
        let layout = &self.config.layout;
        if let Some(td) = td.filter(|td| *td > 0.0) {
            figure.height = td / layout.vertical_scale;
        }
        figure.width = layout.figure_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Color;
    use crate::striplog::{Interval, Striplog};

    #[test]
    fn tops_replicate_across_panels_with_single_label() {
        let renderer = ScorecardRenderer::default();
        let mut fig = renderer.create_layout(8.0, 6.0);
        let tops = vec![Top::new("Wabamun", 1200.0), Top::new("Banff", 900.0)];
        renderer.draw_tops(&mut fig.panels, &tops, Some(2000.0));

        for (i, panel) in fig.panels.iter().enumerate() {
            assert_eq!(panel.hlines().count(), 2);
            assert_eq!(panel.ylim, Some((2000.0, 0.0)));
            assert!(!panel.show_xticks);
            assert_eq!(panel.show_yticks, i == 0);
            let labels = panel.texts().count();
            if i == fig.panels.len() - 1 {
                assert_eq!(labels, 2);
            } else {
                assert_eq!(labels, 0);
            }
        }
        let last = fig.panels.last().unwrap();
        let label = last.texts().next().unwrap();
        assert_eq!(label.content, "Wabamun");
        assert!((label.x - 1.1).abs() < 1e-12);
        assert!(last.hlines().all(|l| l.shadow && l.color == Color::BLACK));
    }

    #[test]
    fn striplog_track_is_titled_and_ranged() {
        let renderer = ScorecardRenderer::default();
        let log = Striplog::new(vec![
            Interval::new(0.0, 400.0).with_component("lithology", "shale"),
            Interval::new(400.0, 650.0).with_component("lithology", "sandstone"),
        ]);
        let mut panel = Panel::default();
        panel.spines.top = false;
        renderer.draw_striplog(&mut panel, &log, Some(650.0)).unwrap();

        assert_eq!(panel.title.as_deref(), Some("Canstrat\nLithology"));
        assert_eq!(panel.ylim, Some((650.0, 0.0)));
        assert!(!panel.show_ytick_labels);
        assert!(panel.spines.top);
        let fills: Vec<Color> = panel.rects().map(|r| r.fill).collect();
        assert_eq!(fills, vec![Color::GREY, Color::YELLOW]);
    }

    #[test]
    fn side_text_reports_kb_and_rounded_td() {
        let renderer = ScorecardRenderer::default();
        let mut panel = Panel::default();
        let location = WellLocation {
            kb: Some(812.5),
            td: None,
        };
        renderer.put_side_text(&mut panel, &location, Some(1234.6));
        let texts: Vec<&str> = panel.texts().map(|t| t.content.as_str()).collect();
        assert_eq!(texts, vec!["KB elev.: 812.5 m", "TD: 1235 m"]);
        assert!(panel.texts().all(|t| t.coords == Coords::Axes));
    }

    #[test]
    fn side_text_omits_missing_kb() {
        let renderer = ScorecardRenderer::default();
        let mut panel = Panel::default();
        renderer.put_side_text(&mut panel, &WellLocation::default(), Some(10.0));
        assert_eq!(panel.texts().count(), 1);
    }

    #[test]
    fn track_names_skip_striplog_track() {
        let renderer = ScorecardRenderer::default();
        let mut fig = renderer.create_layout(8.0, 6.0);
        renderer.put_track_names(&mut fig.panels);
        let captions: Vec<Option<&str>> = fig
            .panels
            .iter()
            .map(|p| p.caption.as_ref().map(|t| t.content.as_str()))
            .collect();
        assert_eq!(
            captions,
            vec![
                Some("Lithology"),
                Some("Resistivity"),
                Some("Porosity"),
                Some("Density"),
                Some("Sonic"),
                None
            ]
        );
    }

    #[test]
    fn header_and_dims() {
        let renderer = ScorecardRenderer::default();
        let mut fig = renderer.create_layout(8.0, 6.0);
        let header = WellHeader {
            name: "Kennetcook #2".to_string(),
            uwi: "Long = 63* 45'24.460  W".to_string(),
        };
        renderer.put_header_text(&mut fig, &header);
        renderer.adjust_fig_dims(&mut fig, Some(3000.0));

        assert_eq!(fig.texts.len(), 2);
        assert_eq!(fig.texts[0].content, "Kennetcook #2");
        assert!(fig.texts[1].content.starts_with("UWI: "));
        assert!(fig.texts.iter().all(|t| t.coords == Coords::Figure));
        assert!((fig.height - 12.0).abs() < 1e-12);
        assert!(fig.wspace.abs() < f64::EPSILON);

        renderer.adjust_fig_dims(&mut fig, Some(0.0));
        assert!((fig.height - 12.0).abs() < 1e-12);
    }
}
