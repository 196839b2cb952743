//! Directory commands: projects and personnel

use anyhow::Result;
use tabled::Tabled;

use cadcards_core::config::LibraryConfig;
use cadcards_core::directory::{
    Department, Employee, PersonnelFilter, Project, ProjectFilter, ProjectStatus,
};
use cadcards_core::source::{DirectorySource, MockCatalogSource};

use crate::{print_table, truncate};

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Job #")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Phase")]
    phase: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Manager")]
    manager: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        ProjectRow {
            id: project.id.clone(),
            name: truncate(&project.name, 32),
            client: truncate(&project.client, 24),
            status: project.status.to_string(),
            phase: project.phase.clone(),
            progress: format!("{}%", project.progress),
            due: project
                .due_date()
                .map(|d| d.format("%b %d, %Y").to_string())
                .unwrap_or_else(|| project.due_date.clone()),
            manager: project.manager.name.clone(),
        }
    }
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        EmployeeRow {
            id: employee.id.clone(),
            name: employee.name.clone(),
            title: employee.title.clone(),
            department: employee.department.to_string(),
            status: employee.status.to_string(),
            location: employee.location.clone(),
            email: employee.email.clone(),
        }
    }
}

pub async fn projects(
    config: &LibraryConfig,
    search: Option<String>,
    status: Option<ProjectStatus>,
    json_output: bool,
) -> Result<()> {
    let source = MockCatalogSource::from_config(config);
    let projects = source.fetch_projects().await?;

    let filter = ProjectFilter {
        search_term: search.unwrap_or_default(),
        status,
    };
    let matched = filter.apply(&projects);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else if matched.is_empty() {
        println!("No projects match.");
    } else {
        println!("{} of {} projects\n", matched.len(), projects.len());
        let rows: Vec<ProjectRow> = matched.iter().map(|p| ProjectRow::from(*p)).collect();
        print_table(&rows);
    }
    Ok(())
}

pub async fn personnel(
    config: &LibraryConfig,
    search: Option<String>,
    department: Option<Department>,
    json_output: bool,
) -> Result<()> {
    let source = MockCatalogSource::from_config(config);
    let employees = source.fetch_employees().await?;

    let filter = PersonnelFilter {
        search_term: search.unwrap_or_default(),
        department,
    };
    let matched = filter.apply(&employees);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else if matched.is_empty() {
        println!("No staff match.");
    } else {
        println!("{} of {} staff\n", matched.len(), employees.len());
        let rows: Vec<EmployeeRow> = matched.iter().map(|e| EmployeeRow::from(*e)).collect();
        print_table(&rows);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadcards_core::directory::{seed_employees, seed_projects};

    #[test]
    fn test_project_row_formats_progress_and_due_date() {
        let projects = seed_projects();
        let row = ProjectRow::from(&projects[0]);
        assert!(row.progress.ends_with('%'));
        assert_ne!(row.due, "");
    }

    #[test]
    fn test_employee_row_uses_display_names() {
        let employees = seed_employees();
        let gis = employees
            .iter()
            .find(|e| e.department == Department::Gis)
            .unwrap();
        assert_eq!(EmployeeRow::from(gis).department, "GIS");
    }
}
