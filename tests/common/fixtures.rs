//! Test fixtures - reusable CSV and config content.

use orgcheck::Employee;

/// Header line expected by the CSV reader
pub const HEADER: &str = "Id,firstName,lastName,salary,managerId";

/// Five employees: 124 is underpaid, the root 123 is overpaid
pub const REFERENCE_ORG: &str = "Id,firstName,lastName,salary,managerId
123,Joe,Doe,60000,
124,Martin,Chekov,30000,123
125,Bob,Ronstad,47000,123
300,Alice,Hasacat,50000,124
305,Brett,Hardleaf,34000,300
";

/// A small organization with no issues at the default policy
pub const HEALTHY_ORG: &str = "Id,firstName,lastName,salary,managerId
1,Ada,Root,150000,
2,Ben,Lead,120000,1
3,Cy,Dev,90000,2
4,Di,Dev,90000,2
";

/// Two employees without a manager
pub const TWO_ROOTS_ORG: &str = "Id,firstName,lastName,salary,managerId
1,Ada,Root,150000,
2,Ben,Other,120000,
";

/// 2 and 3 manage each other
pub const CYCLE_ORG: &str = "Id,firstName,lastName,salary,managerId
1,Ada,Root,150000,
2,Ben,Lead,120000,3
3,Cy,Lead,120000,2
";

/// Build a well-formed organization with one level per entry in `widths`.
///
/// Employees on each level are spread round-robin over the managers on
/// the level above.
pub fn layered_org(widths: &[usize]) -> Vec<Employee> {
    let mut employees = vec![Employee::new("0", "Root", "Boss", 1_000_000.0, None).unwrap()];
    let mut previous: Vec<String> = vec!["0".to_string()];
    let mut next_id = 1;

    for (level, &width) in widths.iter().enumerate() {
        let mut current = Vec::with_capacity(width);
        for i in 0..width {
            let id = next_id.to_string();
            next_id += 1;
            let manager = previous[i % previous.len()].clone();
            let salary = 1_000_000.0 / (level as f64 + 2.0);
            employees.push(
                Employee::new(id.as_str(), "Emp", format!("L{}", level + 1), salary, Some(manager))
                    .unwrap(),
            );
            current.push(id);
        }
        previous = current;
    }
    employees
}

/// Render employees as CSV with the standard header
pub fn to_csv(employees: &[Employee]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for e in employees {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            e.id(),
            e.first_name(),
            e.last_name(),
            e.salary(),
            e.manager_id().unwrap_or("")
        ));
    }
    out
}
