//! Firm directory: the job board and the staff roster
//!
//! Both are small fixed lists served by the mock source. Filtering is a
//! linear scan with the same shape as the catalog's: a free-text search
//! ANDed with one optional enum selector.

mod personnel;
mod project;

pub use personnel::{Department, Employee, EmployeeStatus, PersonnelFilter};
pub use project::{Project, ProjectFilter, ProjectStatus, TeamMember};

fn member(id: &str, name: &str, role: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    client: &str,
    location: &str,
    status: ProjectStatus,
    phase: &str,
    progress: u8,
    due_date: &str,
    manager: TeamMember,
    team: Vec<TeamMember>,
    tags: &[&str],
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        location: location.to_string(),
        status,
        phase: phase.to_string(),
        progress,
        due_date: due_date.to_string(),
        manager,
        team,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: None,
    }
}

/// The firm's current job board
pub fn seed_projects() -> Vec<Project> {
    vec![
        project(
            "24-105",
            "Smith Creek Subdivision",
            "Lennar Homes",
            "Santa Rosa, CA",
            ProjectStatus::Active,
            "Construction Docs",
            65,
            "2024-06-15",
            member("pm1", "Sarah J.", "PM"),
            vec![
                member("sur1", "R. Toony", "Lead Surveyor"),
                member("dr1", "Mike D.", "Drafter"),
            ],
            &["Residential", "Grading", "Storm"],
        ),
        project(
            "24-089",
            "Hwy 101 Corridor Widening",
            "CalTrans",
            "Petaluma, CA",
            ProjectStatus::Hold,
            "Design Development",
            30,
            "2024-09-01",
            member("pm2", "David R.", "PM"),
            vec![member("eng1", "Jessica T.", "Civil Lead")],
            &["Transportation", "Public Works"],
        ),
        project(
            "23-210",
            "City Hall Annex Retrofit",
            "City of Napa",
            "Napa, CA",
            ProjectStatus::Completed,
            "As-Builts",
            100,
            "2024-02-28",
            member("pm1", "Sarah J.", "PM"),
            vec![member("dr2", "Tom H.", "Drafter")],
            &["Commercial", "Retrofit"],
        ),
        project(
            "24-112",
            "Oakmont Senior Living",
            "Oakmont Group",
            "Windsor, CA",
            ProjectStatus::Bidding,
            "Proposal",
            10,
            "2024-04-20",
            member("pm3", "Robert L.", "Principal"),
            Vec::new(),
            &["Commercial", "Grading"],
        ),
        project(
            "24-115",
            "Riverside Park Improvements",
            "County Parks",
            "Healdsburg, CA",
            ProjectStatus::Active,
            "Permitting",
            85,
            "2024-05-10",
            member("pm2", "David R.", "PM"),
            vec![member("sur1", "R. Toony", "Lead Surveyor")],
            &["Public Works", "Parks"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    title: &str,
    department: Department,
    status: EmployeeStatus,
    email: &str,
    phone: &str,
    location: &str,
    skills: &[&str],
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        department,
        email: email.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
        status,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// The firm's staff roster
pub fn seed_employees() -> Vec<Employee> {
    use Department::*;
    use EmployeeStatus::*;

    vec![
        employee("ENG-101", "Elena Vance", "Senior Civil Engineer", Engineering, Active,
            "e.vance@acme.com", "x120", "Office 204", &["Hydrology", "HEC-RAS", "Project Mgmt"]),
        employee("CAD-055", "Marcus Thorne", "CAD Technician III", Engineering, Remote,
            "m.thorne@acme.com", "x135", "Remote (OR)", &["Civil 3D", "LISP", "ArcGIS"]),
        employee("MGT-002", "Sarah Jenkins", "Project Manager", Management, Meeting,
            "s.jenkins@acme.com", "x102", "Office 101", &["Client Relations", "Budgeting", "Scheduling"]),
        employee("CAD-089", "Mike 'New Guy' Davis", "Jr. Drafter", Engineering, Active,
            "m.davis@acme.com", "x140", "Bullpen Desk 4", &["AutoCAD", "Coffee Runs", "Learning"]),
        employee("SUR-042", "Jim 'Boots' Buckner", "Party Chief", Surveying, Field,
            "j.buckner@acme.com", "Mobile", "Site: Hwy 101", &["Trimble", "Boundary", "Chainsaw"]),
        employee("GIS-012", "Chloe Rayner", "GIS Specialist", Gis, Active,
            "c.rayner@acme.com", "x155", "Server Room", &["Python", "QGIS", "Database Admin"]),
        employee("INT-099", "Sam K.", "Summer Intern", Engineering, Active,
            "intern@acme.com", "N/A", "Archive Room", &["Scanning", "Filing", "Optimism"]),
        employee("ADM-001", "Linda Graham", "Office Manager", Admin, Active,
            "l.graham@acme.com", "x100", "Front Desk", &["Payroll", "Logistics", "Enforcement"]),
        employee("ENG-104", "Raj Patel", "Hydrology Engineer", Engineering, Leave,
            "r.patel@acme.com", "x124", "Office 205", &["WSPG", "StormCAD", "Modeling"]),
        employee("SUR-045", "Tyrell Williams", "Drone Pilot / Surveyor", Surveying, Field,
            "t.williams@acme.com", "Mobile", "Site: Smith Creek", &["LiDAR", "DroneDeploy", "Photogrammetry"]),
    ]
}
