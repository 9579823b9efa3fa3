use splitpot_application::{
    Command, Contribution, Declaration, Script, ScriptParseError, ScriptParser, ScriptStatement,
    ScriptStatementWithLine, Statement,
};
use splitpot_domain::Money;
use splitpot_parser::{
    parse_script, Command as ParserCommand, ParseError, Statement as ParserStatement,
};

/// Adapts the nom script grammar to the application's `Script` model.
#[derive(Default)]
pub struct SplitpotScriptParser;

impl ScriptParser for SplitpotScriptParser {
    fn parse<'a>(&self, content: &'a str) -> Result<Script<'a>, ScriptParseError> {
        let parsed = parse_script(content).map_err(|err| match err {
            ParseError::SyntaxError { line, detail } => {
                ScriptParseError::SyntaxError { line, detail }
            }
        })?;

        let statements = parsed
            .statements
            .into_iter()
            .map(|stmt| {
                let statement = match stmt.statement {
                    ParserStatement::Declaration(decl) => {
                        ScriptStatement::Domain(Statement::Declaration(Declaration {
                            members: decl.members,
                        }))
                    }
                    ParserStatement::Contribution(contribution) => {
                        ScriptStatement::Domain(Statement::Contribution(Contribution {
                            name: contribution.name,
                            amount: Money::new(contribution.amount),
                        }))
                    }
                    ParserStatement::Command(command) => ScriptStatement::Command(match command {
                        ParserCommand::Total => Command::Total,
                        ParserCommand::Balances => Command::Balances,
                        ParserCommand::Settle => Command::Settle,
                    }),
                };
                ScriptStatementWithLine {
                    line: stmt.line,
                    statement,
                }
            })
            .collect();

        Ok(Script::new(statements))
    }
}
