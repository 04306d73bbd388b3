//! CLI driver for the board engine.
//!
//! # Responsibility
//! - Load the sample board, replay an optional JSON script of steps against
//!   it and print the resulting board as JSON.
//! - Keep output deterministic so scripts double as regression fixtures.
//!
//! Usage: `laneboard_cli [script.json]`. Logging is enabled when
//! `LANEBOARD_LOG_DIR` is set.

use laneboard_core::{
    init_logging, sample_board, Board, BoardService, CardAction, ColumnAction, ColumnId,
    DragSource, DropEvent, DropTarget, Edge, EngineResult, ItemId, LoggingConfig, Outcome,
    SelectionSet,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

/// One scripted interaction.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    ReorderColumn {
        start_index: usize,
        finish_index: usize,
        edge: Option<Edge>,
    },
    ReorderCard {
        column_id: ColumnId,
        start_index: usize,
        finish_index: usize,
        edge: Option<Edge>,
    },
    MoveCard {
        start_column_id: ColumnId,
        finish_column_id: ColumnId,
        index_in_start: usize,
        index_in_finish: Option<usize>,
    },
    Select {
        item_id: ItemId,
        #[serde(default)]
        mode: SelectMode,
    },
    DropCard {
        item_id: ItemId,
        column_id: Option<ColumnId>,
        target_item_id: Option<ItemId>,
        edge: Option<Edge>,
    },
    DropColumn {
        column_id: ColumnId,
        target_column_id: Option<ColumnId>,
        edge: Option<Edge>,
    },
    CardAction {
        item_id: ItemId,
        action: CardAction,
    },
    ColumnAction {
        column_id: ColumnId,
        action: ColumnAction,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SelectMode {
    #[default]
    Single,
    Group,
    Range,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    outcomes: Vec<Option<Outcome>>,
    selection: &'a SelectionSet,
    board: &'a Board,
}

fn main() -> ExitCode {
    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("laneboard: logging disabled: {err}");
        }
    }

    match run(std::env::args().nth(1)) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("laneboard: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(script_path: Option<String>) -> Result<String, String> {
    let steps = match script_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|err| format!("cannot read script `{path}`: {err}"))?;
            serde_json::from_str::<Vec<Step>>(&raw)
                .map_err(|err| format!("invalid script `{path}`: {err}"))?
        }
        None => Vec::new(),
    };

    let mut service = BoardService::new(sample_board().map_err(|err| err.to_string())?);
    let mut outcomes = Vec::with_capacity(steps.len());
    for (index, step) in steps.into_iter().enumerate() {
        let outcome = apply(&mut service, step).map_err(|err| format!("step {index}: {err}"))?;
        outcomes.push(outcome);
    }
    info!(
        "event=script_done module=cli status=ok steps={} items={}",
        outcomes.len(),
        service.board().item_count()
    );

    let report = Report {
        outcomes,
        selection: service.selection(),
        board: service.board(),
    };
    serde_json::to_string_pretty(&report).map_err(|err| err.to_string())
}

fn apply(service: &mut BoardService, step: Step) -> EngineResult<Option<Outcome>> {
    let session = service.session();
    match step {
        Step::ReorderColumn {
            start_index,
            finish_index,
            edge,
        } => service.reorder_column(start_index, finish_index, edge),
        Step::ReorderCard {
            column_id,
            start_index,
            finish_index,
            edge,
        } => service.reorder_card(&column_id, start_index, finish_index, edge),
        Step::MoveCard {
            start_column_id,
            finish_column_id,
            index_in_start,
            index_in_finish,
        } => service.move_card(
            &start_column_id,
            &finish_column_id,
            index_in_start,
            index_in_finish,
        ),
        Step::Select { item_id, mode } => {
            match mode {
                SelectMode::Single => service.toggle_selection(&item_id)?,
                SelectMode::Group => service.toggle_selection_in_group(&item_id)?,
                SelectMode::Range => service.multi_select_to(&item_id)?,
            };
            Ok(None)
        }
        Step::DropCard {
            item_id,
            column_id,
            target_item_id,
            edge,
        } => {
            let source = DragSource::card(session, item_id);
            service.begin_drag(source.clone());
            let mut targets = Vec::new();
            if let Some(column_id) = column_id {
                if let Some(target_item_id) = target_item_id {
                    targets.push(DropTarget::card(session, target_item_id, edge));
                }
                targets.push(DropTarget::column(session, column_id, None));
            }
            service.drop(&DropEvent::new(source, targets))
        }
        Step::DropColumn {
            column_id,
            target_column_id,
            edge,
        } => {
            let source = DragSource::column(session, column_id);
            service.begin_drag(source.clone());
            let targets = target_column_id
                .map(|target| DropTarget::column(session, target, edge))
                .into_iter()
                .collect();
            service.drop(&DropEvent::new(source, targets))
        }
        Step::CardAction { item_id, action } => service.apply_card_action(&item_id, &action),
        Step::ColumnAction { column_id, action } => {
            service.apply_column_action(&column_id, action)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, Step};
    use laneboard_core::{sample_board, BoardService, ColumnId};

    fn steps(raw: &str) -> Vec<Step> {
        serde_json::from_str(raw).expect("script parses")
    }

    #[test]
    fn scripted_batch_drop_moves_selection() {
        let mut service = BoardService::new(sample_board().expect("sample board"));
        let script = steps(
            r#"[
                {"op": "select", "item_id": "id:1"},
                {"op": "select", "item_id": "id:3", "mode": "group"},
                {"op": "drop_card", "item_id": "id:3", "column_id": "jira",
                 "target_item_id": "id:11", "edge": "before"}
            ]"#,
        );
        for step in script {
            apply(&mut service, step).expect("step applies");
        }

        let jira = service
            .board()
            .column(&ColumnId::from("jira"))
            .expect("jira exists")
            .item_ids()
            .take(3)
            .map(|id| id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(jira, vec!["id:3", "id:1", "id:11"]);
        assert!(service.selection().is_empty());
    }

    #[test]
    fn menu_actions_parse_from_script() {
        let mut service = BoardService::new(sample_board().expect("sample board"));
        let script = steps(
            r#"[
                {"op": "column_action", "column_id": "jira", "action": "move_left"},
                {"op": "card_action", "item_id": "id:12",
                 "action": {"type": "move_to_column", "column_id": "trello"}}
            ]"#,
        );
        let outcomes = script
            .into_iter()
            .map(|step| apply(&mut service, step).expect("step applies"))
            .collect::<Vec<_>>();
        assert!(outcomes.iter().all(Option::is_some));
        assert_eq!(
            service.board().ordered_column_ids()[0],
            ColumnId::from("jira")
        );
    }
}
