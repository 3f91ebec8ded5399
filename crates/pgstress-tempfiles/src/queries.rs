//! SQL for the temp-files workload.
//!
//! The scratch table is 26 untyped text columns filled with random values.
//! Grouping and sorting over every column, with no index to lean on, forces
//! the server to spill the sort to temporary files once the working set
//! outgrows `work_mem`.

/// Creates the scratch table. Safe to run against an existing table.
pub const CREATE_SCRATCH_TABLE: &str = "CREATE TABLE IF NOT EXISTS _pgstress_tempfiles_workload \
(a text, b text, c text, d text, e text, f text, g text, h text, i text, j text, k text, l text, \
m text, n text, o text, p text, q text, r text, s text, t text, u text, v text, w text, x text, \
y text, z text)";

/// Seeds the scratch table with `$1` rows of random text. Appends on every
/// run; it is the caller's job to run it once per session.
pub const SEED_SCRATCH_TABLE: &str = "INSERT INTO _pgstress_tempfiles_workload \
(a,b,c,d,e,f,g,h,i,j,k,l,m,n,o,p,q,r,s,t,u,v,w,x,y,z) SELECT \
random()::text,random()::text,random()::text,random()::text,random()::text,random()::text,\
random()::text,random()::text,random()::text,random()::text,random()::text,random()::text,\
random()::text,random()::text,random()::text,random()::text,random()::text,random()::text,\
random()::text,random()::text,random()::text,random()::text,random()::text,random()::text,\
random()::text,random()::text FROM generate_series(1,$1)";

/// The stress query: an unindexed 26-column group-and-sort that spills to
/// temporary files.
pub const SORT_SPILL_QUERY: &str = "SELECT a,b,c,d,e,f,g,h,i,j,k,l,m,n,o,p,q,r,s,t,u,v,w,x,y,z \
FROM _pgstress_tempfiles_workload \
GROUP BY z,y,x,w,v,u,t,s,r,q,p,o,n,m,l,k,j,i,h,g,f,e,d,c,b,a \
ORDER BY a,b,c,d,e,f,g,h,i,j,k,l,m,n,o,p,q,r,s,t,u,v,w,x,y,z DESC";

/// Removes the scratch table. Safe to run when the table is already gone.
pub const DROP_SCRATCH_TABLE: &str = "DROP TABLE IF EXISTS _pgstress_tempfiles_workload";
