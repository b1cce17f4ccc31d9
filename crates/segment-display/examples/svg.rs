use segment_display::{Color, DisplayConfig, SegmentDisplay, SegmentKind};
use segment_display_svg::SvgSurface;

fn draw_display_line(
    surface: SvgSurface,
    kind: SegmentKind,
    text: &str,
    y_offset: f64,
    line_height: f64,
) -> anyhow::Result<SvgSurface> {
    let config = DisplayConfig {
        cell_count: text.chars().count(),
        y: y_offset,
        width: 60.0 * text.chars().count() as f64,
        height: line_height,
        side_bevel: kind == SegmentKind::SixteenSegment,
        ..DisplayConfig::default()
    };

    let mut display = SegmentDisplay::new(kind, config, surface)?;
    display.set_text(Some(text));

    Ok(display.into_surface())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let line_height = 120.0;
    let width = 60.0 * 10.0;
    let height = line_height * 3.0;

    let mut surface = SvgSurface::new(width, height).with_background(Color::rgb(0, 0, 0));

    surface = draw_display_line(surface, SegmentKind::SevenSegment, "0123456789", 0.0, line_height)?;
    surface = draw_display_line(surface, SegmentKind::SevenSegment, "HELLO-1234", line_height, line_height)?;
    surface = draw_display_line(
        surface,
        SegmentKind::SixteenSegment,
        "SEGMENTS+*",
        line_height * 2.0,
        line_height,
    )?;

    surface.write_to("output_display.svg")?;
    println!("Wrote output_display.svg");

    Ok(())
}
