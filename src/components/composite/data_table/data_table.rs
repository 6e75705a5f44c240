//! DataTable Component
//!
//! A sortable, selectable data table with loading and empty states.

use std::rc::Rc;
use std::time::Duration;

use gpui::{
    div, prelude::*, pulsating_between, px, relative, Animation, AnimationExt, AnyElement, App,
    Context, Div, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};
use gpui_component::Icon;

use super::column::{Column, ColumnWidth};
use super::model::{TableBody, TableModel, VisibleRow};
use super::record::TableRecord;
use super::row_key::{RowKey, RowKeyAccessor};
use super::selection::HeaderCheckState;
use super::sort::SortDirection;
use crate::assets::WidgetIcon;
use crate::components::primitives::checkbox::{CheckState, Checkbox};
use crate::constants::SELECTION_COLUMN_WIDTH;
use crate::theme::{Palette, WidgetColors};

/// Selection callback; receives every selected row in selection order
pub type RowSelectHandler<R> = Rc<dyn Fn(&[R], &mut Window, &mut App) + 'static>;

/// DataTable component
pub struct DataTable<R: TableRecord> {
    model: TableModel<R>,
    on_row_select: Option<RowSelectHandler<R>>,
}

impl<R: TableRecord> DataTable<R> {
    /// Create a new data table
    pub fn new(columns: Vec<Column<R>>, data: Vec<R>, _cx: &mut Context<Self>) -> Self {
        Self {
            model: TableModel::new(columns, data),
            on_row_select: None,
        }
    }

    // ==================== Builders ====================

    /// Enable row selection
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.model.set_selectable(selectable);
        self
    }

    /// Set the loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.model.set_loading(loading);
        self
    }

    /// Set the empty message
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.model.set_empty_message(message);
        self
    }

    /// Set dark mode
    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.model.set_dark_mode(dark_mode);
        self
    }

    /// Set the row key accessor
    pub fn row_key(mut self, row_key: RowKeyAccessor<R>) -> Self {
        self.model.set_row_key(row_key);
        self
    }

    /// Set the selection callback
    pub fn on_row_select(
        mut self,
        handler: impl Fn(&[R], &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_row_select = Some(Rc::new(handler));
        self
    }

    // ==================== Getters ====================

    pub fn model(&self) -> &TableModel<R> {
        &self.model
    }

    pub fn selected_rows(&self) -> Vec<R> {
        self.model.selected_rows()
    }

    // ==================== Setters ====================

    /// Set the rows; selection is reconciled against the new keys
    pub fn set_data(&mut self, data: Vec<R>, window: &mut Window, cx: &mut Context<Self>) {
        if self.model.set_data(data) {
            self.notify_selection(window, cx);
        }
        cx.notify();
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>, cx: &mut Context<Self>) {
        self.model.set_columns(columns);
        cx.notify();
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        self.model.set_loading(loading);
        cx.notify();
    }

    /// Set selectable state
    pub fn set_selectable(&mut self, selectable: bool, cx: &mut Context<Self>) {
        self.model.set_selectable(selectable);
        cx.notify();
    }

    /// Set dark mode
    pub fn set_dark_mode(&mut self, dark_mode: bool, cx: &mut Context<Self>) {
        self.model.set_dark_mode(dark_mode);
        cx.notify();
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.model.set_empty_message(message);
        cx.notify();
    }

    /// Set the row key accessor
    pub fn set_row_key(
        &mut self,
        row_key: RowKeyAccessor<R>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.model.set_row_key(row_key) {
            self.notify_selection(window, cx);
        }
        cx.notify();
    }

    // ==================== Event handling ====================

    fn on_header_click(&mut self, column: &str, cx: &mut Context<Self>) {
        if self.model.click_header(column) {
            cx.notify();
        }
    }

    fn on_select_all(&mut self, checked: bool, window: &mut Window, cx: &mut Context<Self>) {
        if self.model.set_all_selected(checked) {
            self.notify_selection(window, cx);
            cx.notify();
        }
    }

    fn on_select_row(
        &mut self,
        key: &RowKey,
        checked: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.model.set_row_selected(key, checked) {
            self.notify_selection(window, cx);
            cx.notify();
        }
    }

    /// Hand the full selection to the callback after the current update
    fn notify_selection(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(handler) = self.on_row_select.clone() else {
            return;
        };
        let selected = self.model.selected_rows();
        window.defer(cx, move |window, cx| handler(&selected, window, cx));
    }

    // ==================== Rendering ====================

    /// Apply a column width to a cell
    fn sized_cell(width: &ColumnWidth) -> Div {
        let cell = div().px_6().overflow_hidden();
        match *width {
            ColumnWidth::Fixed(w) => cell.flex_none().w(px(w)),
            ColumnWidth::Flex { min, max } => {
                let cell = cell.flex_1();
                let cell = match min {
                    Some(min) => cell.min_w(px(min)),
                    None => cell,
                };
                match max {
                    Some(max) => cell.max_w(px(max)),
                    None => cell,
                }
            }
            ColumnWidth::Percent(p) => cell.flex_none().w(relative(p / 100.0)),
        }
    }

    fn selection_cell() -> Div {
        div()
            .flex_none()
            .w(px(SELECTION_COLUMN_WIDTH))
            .pl_6()
            .flex()
            .items_center()
    }

    fn render_sort_icon(&self, column: &Column<R>, palette: Palette) -> Option<AnyElement> {
        if !column.sortable {
            return None;
        }

        let active = if palette.dark {
            palette.text_muted
        } else {
            palette.table_header_text
        };

        let icon = match self.model.sort_state().direction_for(&column.key) {
            Some(SortDirection::Ascending) => Icon::from(WidgetIcon::ChevronUp)
                .w(px(16.0))
                .h(px(16.0))
                .text_color(active)
                .into_any_element(),
            Some(SortDirection::Descending) => Icon::from(WidgetIcon::ChevronDown)
                .w(px(16.0))
                .h(px(16.0))
                .text_color(active)
                .into_any_element(),
            None => div()
                .flex()
                .flex_col()
                .child(
                    Icon::from(WidgetIcon::ChevronUp)
                        .w(px(12.0))
                        .h(px(12.0))
                        .text_color(WidgetColors::chevron_inactive()),
                )
                .child(
                    Icon::from(WidgetIcon::ChevronDown)
                        .w(px(12.0))
                        .h(px(12.0))
                        .text_color(WidgetColors::chevron_inactive()),
                )
                .into_any_element(),
        };

        Some(div().ml_1().child(icon).into_any_element())
    }

    /// Render the header row
    fn render_header(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let header_state = match self.model.header_check_state() {
            HeaderCheckState::Checked => CheckState::Checked,
            HeaderCheckState::Indeterminate => CheckState::Indeterminate,
            HeaderCheckState::Unchecked => CheckState::Unchecked,
        };

        div()
            .w_full()
            .flex()
            .items_center()
            .py_3()
            .bg(palette.table_header_bg)
            .border_b_1()
            .border_color(palette.table_border)
            .when(self.model.is_selectable(), |el| {
                el.child(
                    Self::selection_cell().child(
                        Checkbox::new("data-table-select-all")
                            .state(header_state)
                            .palette(palette)
                            .on_change(cx.listener(|this, checked: &bool, window, cx| {
                                this.on_select_all(*checked, window, cx)
                            })),
                    ),
                )
            })
            .children(self.model.columns().iter().map(|column| {
                let key = column.key.clone();
                let sortable = column.sortable;
                Self::sized_cell(&column.width).child(
                    div()
                        .id(SharedString::from(format!("data-table-header-{key}")))
                        .flex()
                        .items_center()
                        .text_xs()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(palette.table_header_text)
                        .when(sortable, |el| {
                            el.cursor_pointer()
                                .hover(|s| s.opacity(0.75))
                                .on_click(cx.listener(move |this, _, _, cx| {
                                    this.on_header_click(&key, cx)
                                }))
                        })
                        .child(SharedString::from(column.title.to_uppercase()))
                        .children(self.render_sort_icon(column, palette)),
                )
            }))
    }

    /// Render a data row
    fn render_row(
        &self,
        row: VisibleRow<'_, R>,
        palette: Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let selectable = self.model.is_selectable();
        let text_color = if palette.dark {
            palette.text_secondary
        } else {
            palette.text_primary
        };
        let key = row.key.clone();
        let selected = row.selected;

        div()
            .id(row.element_id("data-table-row"))
            .w_full()
            .flex()
            .items_center()
            .py_4()
            .border_b_1()
            .border_color(palette.table_border)
            .when(selected, |el| el.bg(palette.row_selected))
            .when(!selected, |el| el.hover(move |s| s.bg(palette.row_hover)))
            .when(selectable, |el| {
                el.child(
                    Self::selection_cell().child(
                        Checkbox::new(row.element_id("data-table-select"))
                            .checked(selected)
                            .palette(palette)
                            .on_change(cx.listener(move |this, checked: &bool, window, cx| {
                                this.on_select_row(&key, *checked, window, cx)
                            })),
                    ),
                )
            })
            .children(self.model.columns().iter().map(|column| {
                let value = row.record.field(&column.data_index);
                let content = match &column.render {
                    Some(render) => render(&value, row.record, row.index),
                    None => SharedString::from(value.to_string()).into_any_element(),
                };
                Self::sized_cell(&column.width)
                    .text_sm()
                    .text_color(text_color)
                    .child(content)
            }))
    }

    /// Render loading state
    fn render_skeleton(&self, rows: usize, cells: usize, palette: Palette) -> impl IntoElement {
        let selectable = self.model.is_selectable();

        // The first cell stands in for the checkbox when rows are selectable
        let block_row = move || {
            div().flex().gap_4().children((0..cells).map(|i| {
                let block = div().h(px(16.0)).rounded_sm().bg(WidgetColors::skeleton());
                if selectable && i == 0 {
                    block.w(px(16.0))
                } else {
                    block.flex_1()
                }
            }))
        };

        div()
            .w_full()
            .rounded_lg()
            .border_1()
            .border_color(palette.table_border)
            .bg(palette.table_bg)
            .overflow_hidden()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(div().px_6().py_3().bg(palette.table_header_bg).child(block_row()))
                    .children((0..rows).map(|_| {
                        div()
                            .px_6()
                            .py_4()
                            .border_t_1()
                            .border_color(palette.table_border)
                            .child(block_row())
                    }))
                    .with_animation(
                        "data-table-skeleton",
                        Animation::new(Duration::from_secs(2))
                            .repeat()
                            .with_easing(pulsating_between(0.4, 1.0)),
                        |el, delta| el.opacity(delta),
                    ),
            )
    }

    /// Render empty state
    fn render_empty(
        &self,
        title: SharedString,
        message: SharedString,
        palette: Palette,
    ) -> impl IntoElement {
        let (title_color, message_color) = if palette.dark {
            (palette.text_secondary, palette.text_muted)
        } else {
            (palette.text_primary, palette.text_muted)
        };

        div()
            .w_full()
            .p_12()
            .flex()
            .flex_col()
            .items_center()
            .rounded_lg()
            .border_1()
            .border_color(palette.table_border)
            .bg(palette.table_bg)
            .child(
                div()
                    .mb_2()
                    .text_lg()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(title_color)
                    .child(title),
            )
            .child(div().text_color(message_color).child(message))
    }
}

impl<R: TableRecord> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Palette::for_mode(self.model.is_dark_mode());

        match self.model.body() {
            TableBody::Skeleton { rows, cells } => {
                self.render_skeleton(rows, cells, palette).into_any_element()
            }
            TableBody::Empty { title, message } => {
                self.render_empty(title, message, palette).into_any_element()
            }
            TableBody::Rows => {
                let rows: Vec<AnyElement> = self
                    .model
                    .visible_rows()
                    .map(|row| self.render_row(row, palette, cx).into_any_element())
                    .collect();

                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .rounded_lg()
                    .border_1()
                    .border_color(palette.table_border)
                    .bg(palette.table_bg)
                    .shadow_sm()
                    .overflow_hidden()
                    .child(self.render_header(palette, cx))
                    .child(div().id("data-table-rows").flex().flex_col().children(rows))
                    .into_any_element()
            }
        }
    }
}
