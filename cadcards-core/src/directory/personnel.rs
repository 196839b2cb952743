//! Staff records and the personnel filter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CadcardsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Surveying,
    Admin,
    #[serde(rename = "GIS")]
    Gis,
    Management,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Surveying,
        Department::Admin,
        Department::Gis,
        Department::Management,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Surveying => "Surveying",
            Department::Admin => "Admin",
            Department::Gis => "GIS",
            Department::Management => "Management",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = CadcardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CadcardsError::UnknownValue {
                kind: "department",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    Field,
    Remote,
    Leave,
    Meeting,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Field => "FIELD",
            EmployeeStatus::Remote => "REMOTE",
            EmployeeStatus::Leave => "LEAVE",
            EmployeeStatus::Meeting => "MEETING",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Badge id, e.g. `ENG-101`
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: Department,
    pub email: String,
    pub phone: String,
    /// Office, desk or field site
    pub location: String,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonnelFilter {
    pub search_term: String,
    pub department: Option<Department>,
}

impl PersonnelFilter {
    /// Case-insensitive match on name or job title, plus department
    pub fn matches(&self, employee: &Employee) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = employee.name.to_lowercase().contains(&needle)
            || employee.title.to_lowercase().contains(&needle);
        let matches_department = self.department.map_or(true, |d| employee.department == d);
        matches_search && matches_department
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed_employees;

    #[test]
    fn test_search_name_or_title() {
        let staff = seed_employees();
        let filter = PersonnelFilter {
            search_term: "engineer".to_string(),
            department: None,
        };
        let ids: Vec<&str> = filter.apply(&staff).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ENG-101", "ENG-104"]);

        let filter = PersonnelFilter {
            search_term: "BOOTS".to_string(),
            department: None,
        };
        assert_eq!(filter.apply(&staff)[0].id, "SUR-042");
    }

    #[test]
    fn test_department_filter() {
        let staff = seed_employees();
        let filter = PersonnelFilter {
            department: Some(Department::Surveying),
            ..Default::default()
        };
        assert_eq!(filter.apply(&staff).len(), 2);
    }

    #[test]
    fn test_department_parse_and_serde() {
        assert_eq!("gis".parse::<Department>().unwrap(), Department::Gis);
        assert_eq!(serde_json::to_value(Department::Gis).unwrap(), "GIS");
        assert!("Marketing".parse::<Department>().is_err());
    }
}
