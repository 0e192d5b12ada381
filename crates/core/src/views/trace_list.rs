use crate::model::{Session, Trace};

/// One row of the trace list, as the presentation layer draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    pub trace: Trace,
    pub selected: bool,
    /// Whether the row holds uncommitted name text.
    pub editing: bool,
    /// Text the name input shows: the draft while editing, else the name.
    pub name_input: String,
    pub annotation_count: usize,
}

/// Rows in registry order.
pub fn trace_rows(session: &Session) -> Vec<TraceRow> {
    let selected = session.selected_id();
    let edits = session.name_edits();
    session
        .registry()
        .iter()
        .map(|trace| TraceRow {
            trace: trace.clone(),
            selected: selected == Some(trace.id),
            editing: edits.is_editing(&trace.id),
            name_input: edits.display_value(trace).to_owned(),
            annotation_count: session.log().for_trace(trace.id).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::id_source::SequentialIds;
    use ultratrace_protocol::Geometry;

    #[test]
    fn committing_the_draft_returns_row_to_name() {
        let mut s = Session::with_id_source(SessionConfig::default(), SequentialIds::new());
        let id = s.add_trace();
        assert!(s.type_trace_name(id, "jaw").is_ok());
        assert!(s.blur_trace_name(id).is_some());

        let rows = trace_rows(&s);
        assert!(!rows[0].editing);
        assert_eq!(rows[0].name_input, "jaw");
    }

    #[test]
    fn rows_reflect_order_selection_and_drafts() {
        let mut s = Session::with_id_source(SessionConfig::default(), SequentialIds::new());
        let a = s.add_trace();
        let b = s.add_trace();
        assert!(s.edit_trace_name(a, "tongue").is_ok());
        assert!(s.select_trace(Some(b)).is_ok());
        assert!(s.type_trace_name(a, "tong").is_ok());
        let geometry = Geometry::point(3.0, 4.0).expect("in range");
        assert!(s.on_geometry_committed(geometry).is_ok());

        let rows = trace_rows(&s);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].trace.id, a);
        assert!(!rows[0].selected);
        assert!(rows[0].editing);
        assert_eq!(rows[0].name_input, "tong");
        assert_eq!(rows[0].trace.name, "tongue");
        assert_eq!(rows[0].annotation_count, 0);

        assert_eq!(rows[1].trace.id, b);
        assert!(rows[1].selected);
        assert!(!rows[1].editing);
        assert_eq!(rows[1].name_input, "");
        assert_eq!(rows[1].annotation_count, 1);
    }
}
