//! The static command table.
//!
//! Every command the dispatcher knows lives in [`COMMANDS`]. Dispatch and the
//! help listing both read this one table, so adding a row here is all it takes
//! to expose a new command.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Section a command is listed under in the help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    ProjectInitialization,
    PhaseWorkflow,
    MilestoneManagement,
    PhaseManagement,
    QuickTasks,
    NavigationInfo,
    WorkflowManagement,
    Utilities,
}

impl CommandGroup {
    /// Help sections in display order.
    pub const ALL: [CommandGroup; 8] = [
        CommandGroup::ProjectInitialization,
        CommandGroup::PhaseWorkflow,
        CommandGroup::MilestoneManagement,
        CommandGroup::PhaseManagement,
        CommandGroup::QuickTasks,
        CommandGroup::NavigationInfo,
        CommandGroup::WorkflowManagement,
        CommandGroup::Utilities,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::ProjectInitialization => "Project Initialization",
            CommandGroup::PhaseWorkflow => "Phase Workflow",
            CommandGroup::MilestoneManagement => "Milestone Management",
            CommandGroup::PhaseManagement => "Phase Management",
            CommandGroup::QuickTasks => "Quick Tasks",
            CommandGroup::NavigationInfo => "Navigation & Info",
            CommandGroup::WorkflowManagement => "Workflow Management",
            CommandGroup::Utilities => "Utilities",
        }
    }
}

/// One row of the command table. Both paths are relative to the
/// installation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub group: CommandGroup,
    /// Argument synopsis shown next to the name in help, may be empty.
    pub usage: &'static str,
    pub summary: &'static str,
    pub command_path: &'static str,
    pub workflow_path: &'static str,
}

impl CommandEntry {
    /// Candidate documents in priority order: the command definition first,
    /// then the workflow it falls back to.
    pub fn candidates(&self) -> [&'static str; 2] {
        [self.command_path, self.workflow_path]
    }

    /// `name` followed by its usage synopsis, as shown in help.
    pub fn synopsis(&self) -> String {
        if self.usage.is_empty() {
            self.name.to_string()
        } else {
            format!("{} {}", self.name, self.usage)
        }
    }
}

macro_rules! entry {
    ($group:ident, $name:literal, $usage:literal, $summary:literal) => {
        CommandEntry {
            name: $name,
            group: CommandGroup::$group,
            usage: $usage,
            summary: $summary,
            command_path: concat!("commands/gsd/", $name, ".md"),
            workflow_path: concat!("workflows/", $name, ".md"),
        }
    };
}

pub static COMMANDS: &[CommandEntry] = &[
    entry!(ProjectInitialization, "new-project", "[--auto]", "Initialize project: questions → research → requirements → roadmap"),
    entry!(ProjectInitialization, "map-codebase", "", "Analyze existing codebase before new-project"),
    entry!(PhaseWorkflow, "discuss-phase", "<N>", "Capture implementation decisions for phase N"),
    entry!(PhaseWorkflow, "research-phase", "<N>", "Research phase N before planning"),
    entry!(PhaseWorkflow, "plan-phase", "<N>", "Research + plan + verify for phase N"),
    entry!(PhaseWorkflow, "execute-phase", "<N>", "Execute plans in parallel waves"),
    entry!(PhaseWorkflow, "verify-work", "<N>", "Manual user acceptance testing"),
    entry!(MilestoneManagement, "audit-milestone", "", "Verify milestone achieved its goals"),
    entry!(MilestoneManagement, "complete-milestone", "", "Archive milestone, tag release"),
    entry!(MilestoneManagement, "new-milestone", "", "Start next version"),
    entry!(MilestoneManagement, "plan-milestone-gaps", "", "Plan work to complete current milestone"),
    entry!(PhaseManagement, "add-phase", "<description>", "Add new phase to roadmap"),
    entry!(PhaseManagement, "insert-phase", "<after> <desc>", "Insert decimal phase after existing"),
    entry!(PhaseManagement, "remove-phase", "<N> [--force]", "Remove phase and renumber"),
    entry!(PhaseManagement, "list-phase-assumptions", "", "List all phase assumptions"),
    entry!(QuickTasks, "quick", "", "Ad-hoc task with GSD guarantees"),
    entry!(NavigationInfo, "progress", "", "Show project progress and current state"),
    entry!(NavigationInfo, "help", "", "Show GSD command reference"),
    entry!(NavigationInfo, "health", "", "Check .planning/ directory health"),
    entry!(WorkflowManagement, "pause-work", "", "Pause work, capture state"),
    entry!(WorkflowManagement, "resume-work", "", "Resume from pause point"),
    entry!(Utilities, "add-todo", "<description>", "Capture idea for later"),
    entry!(Utilities, "check-todos", "[area]", "List pending todos"),
    entry!(Utilities, "cleanup", "", "Archive completed work"),
    entry!(Utilities, "debug", "", "Debug workflow issues"),
    entry!(Utilities, "reapply-patches", "", "Merge local modifications after update"),
    entry!(Utilities, "settings", "", "Configure GSD preferences"),
    entry!(Utilities, "set-profile", "<name>", "Set agent model profile"),
    entry!(Utilities, "update", "", "Update GSD to latest version"),
    entry!(Utilities, "join-discord", "", "Get Discord invite link"),
];

lazy_static! {
    static ref INDEX: HashMap<&'static str, &'static CommandEntry> =
        COMMANDS.iter().map(|e| (e.name, e)).collect();
}

/// Exact, case-sensitive lookup by command name.
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    INDEX.get(name).copied()
}

/// Entries of one help section, in table order.
pub fn in_group(group: CommandGroup) -> impl Iterator<Item = &'static CommandEntry> {
    COMMANDS.iter().filter(move |e| e.group == group)
}
