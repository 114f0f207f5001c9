//! Renderer view coordinate resolution: explicit mappings, named-range
//! lookup, cache idempotence and invalidation, render/layer contracts.

use plotwonder_core::{
    BBox, CoordinateMapping, Interval, LinearScale, RenderLevel,
};
use plotwonder_ui::{
    CanvasView, CoordinateError, Frame, Painter, PlotView, Renderer, RendererGroup, RendererView,
    DEFAULT_RANGE_NAME,
};
use std::cell::Cell;
use std::rc::Rc;

fn test_plot() -> Rc<PlotView> {
    let canvas = CanvasView::new(BBox::new(0.0, 0.0, 800.0, 600.0));
    let frame = Frame::with_default_scales(
        BBox::new(50.0, 50.0, 600.0, 400.0),
        Interval::new(0.0, 10.0),
        Interval::new(0.0, 5.0),
    );
    PlotView::new(canvas, frame, BBox::new(0.0, 0.0, 800.0, 600.0))
}

#[test]
fn named_range_lookup_builds_transform_from_frame_scales() {
    let plot = test_plot();
    let view = plot.add_renderer(Renderer::new(RenderLevel::Glyph));

    let transform = view.coordinates().unwrap();
    let p = transform.compute(0.0, 0.0);
    assert_eq!(p.x, 50.0); // frame left
    assert_eq!(p.y, 450.0); // frame bottom
}

#[test]
fn explicit_mapping_ignores_range_names_entirely() {
    let plot = test_plot();
    let model = Renderer::new(RenderLevel::Glyph);
    // Range names that do not exist in the frame: with an explicit mapping
    // they must never be consulted.
    model.x_range_name.set("no_such_range".to_string());
    model.y_range_name.set("also_missing".to_string());
    model.set_coordinates(Some(CoordinateMapping::new(
        Interval::new(0.0, 1.0),
        Interval::new(0.0, 1.0),
    )));

    let view = plot.add_renderer(model);
    let transform = view.coordinates().expect("mapping bypasses range names");

    let origin = transform.compute(0.0, 0.0);
    assert_eq!(origin.x, 50.0);
    assert_eq!(origin.y, 450.0);
}

#[test]
fn missing_x_range_fails_naming_the_range() {
    let plot = test_plot();
    let model = Renderer::new(RenderLevel::Glyph);
    model.x_range_name.set("missing_x".to_string());
    let view = plot.add_renderer(model);

    let err = view.coordinates().unwrap_err();
    assert_eq!(err, CoordinateError::UnknownXRange("missing_x".to_string()));
    assert!(err.to_string().contains("missing_x"));
}

#[test]
fn missing_y_range_fails_naming_the_range() {
    let plot = test_plot();
    let model = Renderer::new(RenderLevel::Glyph);
    model.y_range_name.set("missing_y".to_string());
    let view = plot.add_renderer(model);

    let err = view.coordinates().unwrap_err();
    assert_eq!(err, CoordinateError::UnknownYRange("missing_y".to_string()));
    assert!(err.to_string().contains("missing_y"));
}

#[test]
fn repeated_access_returns_the_identical_cached_transform() {
    let plot = test_plot();
    let view = plot.add_renderer(Renderer::new(RenderLevel::Glyph));

    let first = view.coordinates().unwrap();
    let second = view.coordinates().unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn changing_x_range_name_invalidates_the_cache() {
    let plot = test_plot();
    plot.frame().set_x_scale(
        "other",
        LinearScale::new(Interval::new(0.0, 100.0), Interval::new(50.0, 650.0)),
    );
    let view = plot.add_renderer(Renderer::new(RenderLevel::Glyph));

    let before = view.coordinates().unwrap();
    view.model().x_range_name.set("other".to_string());
    let after = view.coordinates().unwrap();

    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(after.x_scale.source, Interval::new(0.0, 100.0));
}

#[test]
fn changing_y_range_name_invalidates_the_cache() {
    let plot = test_plot();
    plot.frame().set_y_scale(
        "other",
        LinearScale::new(Interval::new(-1.0, 1.0), Interval::new(450.0, 50.0)),
    );
    let view = plot.add_renderer(Renderer::new(RenderLevel::Glyph));

    let before = view.coordinates().unwrap();
    view.model().y_range_name.set("other".to_string());
    let after = view.coordinates().unwrap();

    assert!(!Rc::ptr_eq(&before, &after));
}

#[test]
fn frame_change_invalidates_the_cache() {
    let plot = test_plot();
    let view = plot.add_renderer(Renderer::new(RenderLevel::Glyph));

    let before = view.coordinates().unwrap();
    plot.frame().set_bbox(BBox::new(100.0, 50.0, 600.0, 400.0));
    let after = view.coordinates().unwrap();

    assert!(!Rc::ptr_eq(&before, &after));
    // The recomputed transform reflects the moved frame.
    assert_eq!(after.compute(0.0, 0.0).x, 100.0);
}

#[test]
fn plain_notify_change_also_invalidates() {
    let plot = test_plot();
    let view = plot.add_renderer(Renderer::new(RenderLevel::Glyph));

    let before = view.coordinates().unwrap();
    plot.frame().notify_change();
    let after = view.coordinates().unwrap();
    assert!(!Rc::ptr_eq(&before, &after));
}

struct CountingPainter {
    paints: Rc<Cell<u32>>,
}

impl Painter for CountingPainter {
    fn paint(&self, _view: &RendererView) {
        self.paints.set(self.paints.get() + 1);
    }
}

#[test]
fn invisible_renderer_skips_paint_but_finishes_first_pass() {
    let plot = test_plot();
    let model = Renderer::new(RenderLevel::Glyph);
    model.visible.set(false);
    let view = plot.add_renderer(model);

    let paints = Rc::new(Cell::new(0));
    view.set_painter(Box::new(CountingPainter {
        paints: Rc::clone(&paints),
    }));

    assert!(!view.has_rendered());
    view.render();

    assert_eq!(paints.get(), 0);
    assert!(view.has_rendered());
    assert!(plot.is_finished());
}

#[test]
fn visible_renderer_paints() {
    let plot = test_plot();
    let view = plot.add_renderer(Renderer::new(RenderLevel::Glyph));

    let paints = Rc::new(Cell::new(0));
    view.set_painter(Box::new(CountingPainter {
        paints: Rc::clone(&paints),
    }));

    view.render();
    assert_eq!(paints.get(), 1);
}

#[test]
fn overlay_level_draws_on_the_overlay_layer() {
    let plot = test_plot();
    let glyph = plot.add_renderer(Renderer::new(RenderLevel::Glyph));
    let overlay = plot.add_renderer(Renderer::new(RenderLevel::Overlay));

    assert!(Rc::ptr_eq(&glyph.layer().unwrap(), &plot.canvas().primary()));
    assert!(Rc::ptr_eq(&overlay.layer().unwrap(), &plot.canvas().overlays()));
}

#[test]
fn plot_paint_renders_levels_onto_their_layers() {
    let plot = test_plot();
    plot.add_renderer(Renderer::new(RenderLevel::Overlay));
    plot.add_renderer(Renderer::new(RenderLevel::Glyph));
    plot.add_renderer(Renderer::new(RenderLevel::Guide));

    plot.paint();

    assert_eq!(plot.canvas().primary().paint_count(), 2);
    assert_eq!(plot.canvas().overlays().paint_count(), 1);
    assert!(plot.is_finished());
}

#[test]
fn group_visibility_mirrors_into_the_renderer() {
    let plot = test_plot();
    let group = RendererGroup::new(true);
    let model = Renderer::new(RenderLevel::Glyph);
    model.set_group(Some(Rc::clone(&group)));
    let view = plot.add_renderer(model);

    assert!(view.displayed());
    group.set_visible(false);
    assert!(!view.model().visible.get());
    assert!(!view.displayed());
    group.set_visible(true);
    assert!(view.displayed());
}

#[test]
fn detaching_the_group_stops_mirroring() {
    let group = RendererGroup::new(true);
    let model = Renderer::new(RenderLevel::Glyph);
    model.set_group(Some(Rc::clone(&group)));
    model.set_group(None);

    group.set_visible(false);
    assert!(model.visible.get());
}

#[test]
fn default_range_names_are_default() {
    let model = Renderer::new(RenderLevel::Glyph);
    assert_eq!(model.x_range_name.get(), DEFAULT_RANGE_NAME);
    assert_eq!(model.y_range_name.get(), DEFAULT_RANGE_NAME);
}
