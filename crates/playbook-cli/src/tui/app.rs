//! TUI application state over one borrowed plan document.

use playbook_store::{PlanDocument, Stage, Step};

/// Which view the browser is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    StageList,
    StepList,
    StepDetail,
    Help,
}

/// Application state for the browser.
pub struct App<'a> {
    pub plan_key: &'a str,
    pub document: &'a PlanDocument,
    pub current_view: View,
    pub selected_stage: usize,
    pub selected_step: usize,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(plan_key: &'a str, document: &'a PlanDocument) -> Self {
        Self {
            plan_key,
            document,
            current_view: View::StageList,
            selected_stage: 0,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// The stage under the cursor, if any.
    pub fn current_stage(&self) -> Option<&'a Stage> {
        self.document.stages.get(self.selected_stage)
    }

    /// The step under the cursor within the current stage, if any.
    pub fn current_step(&self) -> Option<&'a Step> {
        self.current_stage()?.steps.get(self.selected_step)
    }

    // -- Navigation --

    pub fn navigate_back(&mut self) {
        match self.current_view {
            View::StageList => self.should_quit = true,
            View::StepList => self.current_view = View::StageList,
            View::StepDetail => self.current_view = View::StepList,
            View::Help => self.current_view = View::StageList,
        }
    }

    pub fn navigate_enter(&mut self) {
        match self.current_view {
            View::StageList => {
                if self.current_stage().is_some() {
                    self.current_view = View::StepList;
                    self.selected_step = 0;
                }
            }
            View::StepList => {
                if self.current_step().is_some() {
                    self.current_view = View::StepDetail;
                }
            }
            _ => {}
        }
    }

    pub fn move_up(&mut self) {
        match self.current_view {
            View::StageList => {
                if self.selected_stage > 0 {
                    self.selected_stage -= 1;
                }
            }
            View::StepList => {
                if self.selected_step > 0 {
                    self.selected_step -= 1;
                }
            }
            _ => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.current_view {
            View::StageList => {
                let len = self.document.stages.len();
                if len > 0 && self.selected_stage < len - 1 {
                    self.selected_stage += 1;
                }
            }
            View::StepList => {
                let len = self.current_stage().map(|s| s.steps.len()).unwrap_or(0);
                if len > 0 && self.selected_step < len - 1 {
                    self.selected_step += 1;
                }
            }
            _ => {}
        }
    }

    pub fn show_help(&mut self) {
        self.current_view = View::Help;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> PlanDocument {
        PlanDocument {
            title: "Plan".to_owned(),
            intro: None,
            stages: vec![
                Stage {
                    id: None,
                    title: "One".to_owned(),
                    description: None,
                    steps: vec![
                        Step {
                            id: None,
                            title: "A".to_owned(),
                            goal: None,
                            why: None,
                            how: vec![],
                            kpis: vec![],
                            deliverables: vec![],
                            toolbox: vec![],
                        },
                        Step {
                            id: None,
                            title: "B".to_owned(),
                            goal: None,
                            why: None,
                            how: vec![],
                            kpis: vec![],
                            deliverables: vec![],
                            toolbox: vec![],
                        },
                    ],
                },
                Stage {
                    id: None,
                    title: "Two".to_owned(),
                    description: None,
                    steps: vec![],
                },
            ],
        }
    }

    #[test]
    fn drill_down_and_back_out() {
        let d = doc();
        let mut app = App::new("b2c", &d);

        app.navigate_enter();
        assert_eq!(app.current_view, View::StepList);
        app.navigate_enter();
        assert_eq!(app.current_view, View::StepDetail);

        app.navigate_back();
        assert_eq!(app.current_view, View::StepList);
        app.navigate_back();
        assert_eq!(app.current_view, View::StageList);
        assert!(!app.should_quit);
        app.navigate_back();
        assert!(app.should_quit);
    }

    #[test]
    fn enter_on_empty_stage_stays_in_step_list() {
        let d = doc();
        let mut app = App::new("b2c", &d);
        app.move_down(); // select "Two", which has no steps
        app.navigate_enter();
        assert_eq!(app.current_view, View::StepList);
        app.navigate_enter();
        assert_eq!(app.current_view, View::StepList, "no step to drill into");
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let d = doc();
        let mut app = App::new("b2c", &d);

        app.move_up();
        assert_eq!(app.selected_stage, 0);
        app.move_down();
        assert_eq!(app.selected_stage, 1);
        app.move_down();
        assert_eq!(app.selected_stage, 1, "must clamp at the last stage");
    }

    #[test]
    fn entering_a_stage_resets_the_step_cursor() {
        let d = doc();
        let mut app = App::new("b2c", &d);
        app.navigate_enter();
        app.move_down();
        assert_eq!(app.selected_step, 1);
        app.navigate_back();
        app.navigate_enter();
        assert_eq!(app.selected_step, 0);
    }

    #[test]
    fn help_returns_to_stage_list() {
        let d = doc();
        let mut app = App::new("b2c", &d);
        app.show_help();
        assert_eq!(app.current_view, View::Help);
        app.navigate_back();
        assert_eq!(app.current_view, View::StageList);
    }
}
