//! Editable widget dashboard
//!
//! The scene does not own the widgets. It works through a [`WidgetFields`]
//! collection, which is where the surrounding form keeps them.

use crate::error::DashboardError;
use crate::placement::{compute_placement, Breakpoint, Rect};
use crate::widget::{next_id, Widget};

/// Breakpoint new widgets are placed on
pub const DEFAULT_BREAKPOINT: Breakpoint = Breakpoint::Lg;

/// Form-field collection holding the dashboard's widgets
pub trait WidgetFields {
    fn get_all(&self) -> Vec<Widget>;
    fn push(&mut self, widget: Widget);
    fn remove(&mut self, index: usize);
}

impl WidgetFields for Vec<Widget> {
    fn get_all(&self) -> Vec<Widget> {
        self.clone()
    }

    fn push(&mut self, widget: Widget) {
        Vec::push(self, widget);
    }

    fn remove(&mut self, index: usize) {
        if index < self.len() {
            Vec::remove(self, index);
        }
    }
}

impl<T: WidgetFields + ?Sized> WidgetFields for &mut T {
    fn get_all(&self) -> Vec<Widget> {
        (**self).get_all()
    }

    fn push(&mut self, widget: Widget) {
        (**self).push(widget);
    }

    fn remove(&mut self, index: usize) {
        (**self).remove(index);
    }
}

pub struct DashboardScene<F: WidgetFields> {
    fields: F,
}

impl<F: WidgetFields> DashboardScene<F> {
    pub fn new(fields: F) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn into_fields(self) -> F {
        self.fields
    }

    pub fn widgets(&self) -> Vec<Widget> {
        self.fields.get_all()
    }

    /// Add a widget at the first free spot; returns the id it was given
    pub fn add_widget(&mut self, widget: Widget) -> u64 {
        let widgets = self.fields.get_all();
        let origin = compute_placement(widget.size(), &rects(&widgets), DEFAULT_BREAKPOINT);
        let id = next_id(&widgets);
        tracing::debug!("Adding widget {} at ({}, {})", id, origin.x, origin.y);
        self.fields.push(Widget {
            id,
            x: origin.x,
            y: origin.y,
            ..widget
        });
        id
    }

    /// Clone a widget next to the existing ones; returns the copy's id
    pub fn clone_widget(&mut self, id: u64, breakpoint: Breakpoint) -> Result<u64, DashboardError> {
        let widgets = self.fields.get_all();
        let source = widgets
            .iter()
            .find(|w| w.id == id)
            .ok_or(DashboardError::WidgetNotFound(id))?;

        let origin = compute_placement(source.size(), &rects(&widgets), breakpoint);
        let new_id = next_id(&widgets);
        tracing::debug!("Cloning widget {} as {}", id, new_id);
        self.fields.push(Widget {
            id: new_id,
            label: format!("{} Copy", source.label),
            x: origin.x,
            y: origin.y,
            ..source.clone()
        });
        Ok(new_id)
    }

    /// Remove a widget by id. Returns whether one was removed.
    pub fn delete_widget(&mut self, id: u64) -> bool {
        let index = self.fields.get_all().iter().position(|w| w.id == id);
        match index {
            Some(index) => {
                tracing::debug!("Deleting widget {}", id);
                self.fields.remove(index);
                true
            }
            None => false,
        }
    }
}

fn rects(widgets: &[Widget]) -> Vec<Rect> {
    widgets.iter().map(Widget::rect).collect()
}
